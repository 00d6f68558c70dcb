//! Constrainable property primitives.
//!
//! Every constrainable property of a [`MediaTrackConstraintSet`](crate::constraint_set::MediaTrackConstraintSet)
//! is one of four closed kinds: [`LongConstraint`], [`DoubleConstraint`],
//! [`StringConstraint`] or [`BooleanConstraint`]. Each kind carries the property
//! name it was declared under, so a failing check can report which constraint
//! ruled a candidate out.
//!
//! # Specification
//!
//! See [Constrainable properties](https://www.w3.org/TR/mediacapture-streams/#constrainable-properties).


use std::fmt;

/// Leeway permitted when comparing doubles. The offset absorbs the round-trip
/// error of doubles formatted and parsed again by upstream layers.
pub const CONSTRAINT_EPSILON: f64 = 0.00001;

/// Numeric constraint kinds expose their bounds uniformly so that range algebra
/// and fitness distance can be written once for integers and doubles.
pub trait NumericConstraint {
    type Value: Copy + PartialOrd + Into<f64>;

    fn name(&self) -> &'static str;
    fn min(&self) -> Option<Self::Value>;
    fn max(&self) -> Option<Self::Value>;
    fn exact(&self) -> Option<Self::Value>;
    fn ideal(&self) -> Option<Self::Value>;

    /// Lower bound, with `exact` acting as both bounds.
    fn effective_min(&self) -> Option<Self::Value> {
        self.exact().or_else(|| self.min())
    }

    /// Upper bound, with `exact` acting as both bounds.
    fn effective_max(&self) -> Option<Self::Value> {
        self.exact().or_else(|| self.max())
    }
}

struct NamedValues<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> NamedValues<'a, 'b> {
    fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f, first: true }
    }

    fn emit<T: fmt::Display>(&mut self, name: &str, value: Option<T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.first {
            write!(self.f, ", ")?;
        }
        self.first = false;
        write!(self.f, "{name}: {value}")
    }

    fn emit_strings(&mut self, name: &str, values: &[String]) -> fmt::Result {
        if values.is_empty() {
            return Ok(());
        }
        if !self.first {
            write!(self.f, ", ")?;
        }
        self.first = false;
        write!(self.f, "{name}: [")?;
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                write!(self.f, ", ")?;
            }
            write!(self.f, "\"{v}\"")?;
        }
        write!(self.f, "]")
    }
}

/// An integer-valued constraint such as `width`, `height` or `sampleRate`.
///
/// # Specification
///
/// See [ConstrainULong](https://www.w3.org/TR/mediacapture-streams/#dom-constrainulong).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongConstraint {
    name: &'static str,
    min: Option<i32>,
    max: Option<i32>,
    exact: Option<i32>,
    ideal: Option<i32>,
}

impl LongConstraint {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            min: None,
            max: None,
            exact: None,
            ideal: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min(&self) -> Option<i32> {
        self.min
    }

    pub fn max(&self) -> Option<i32> {
        self.max
    }

    pub fn exact(&self) -> Option<i32> {
        self.exact
    }

    pub fn ideal(&self) -> Option<i32> {
        self.ideal
    }

    pub fn set_min(&mut self, value: i32) {
        self.min = Some(value);
    }

    pub fn set_max(&mut self, value: i32) {
        self.max = Some(value);
    }

    pub fn set_exact(&mut self, value: i32) {
        self.exact = Some(value);
    }

    pub fn set_ideal(&mut self, value: i32) {
        self.ideal = Some(value);
    }

    pub fn with_min(mut self, value: i32) -> Self {
        self.set_min(value);
        self
    }

    pub fn with_max(mut self, value: i32) -> Self {
        self.set_max(value);
        self
    }

    pub fn with_exact(mut self, value: i32) -> Self {
        self.set_exact(value);
        self
    }

    pub fn with_ideal(mut self, value: i32) -> Self {
        self.set_ideal(value);
        self
    }

    pub fn has_min(&self) -> bool {
        self.min.is_some()
    }

    pub fn has_max(&self) -> bool {
        self.max.is_some()
    }

    pub fn has_exact(&self) -> bool {
        self.exact.is_some()
    }

    pub fn has_ideal(&self) -> bool {
        self.ideal.is_some()
    }

    pub fn is_constrained(&self) -> bool {
        self.min.is_some() || self.max.is_some() || self.exact.is_some() || self.ideal.is_some()
    }

    pub fn matches(&self, value: i32) -> bool {
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        if self.max.is_some_and(|max| value > max) {
            return false;
        }
        if self.exact.is_some_and(|exact| value != exact) {
            return false;
        }
        true
    }

    /// The value a caller asked for, `exact` taking precedence over `ideal`.
    pub fn exact_or_ideal(&self) -> Option<i32> {
        self.exact.or(self.ideal)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.name);
    }
}

impl NumericConstraint for LongConstraint {
    type Value = i32;

    fn name(&self) -> &'static str {
        self.name
    }

    fn min(&self) -> Option<i32> {
        self.min
    }

    fn max(&self) -> Option<i32> {
        self.max
    }

    fn exact(&self) -> Option<i32> {
        self.exact
    }

    fn ideal(&self) -> Option<i32> {
        self.ideal
    }
}

impl fmt::Display for LongConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut values = NamedValues::new(f);
        values.emit("min", self.min)?;
        values.emit("max", self.max)?;
        values.emit("exact", self.exact)?;
        values.emit("ideal", self.ideal)?;
        write!(f, "}}")
    }
}

/// A double-valued constraint such as `aspectRatio`, `frameRate` or `latency`.
///
/// Matching tolerates [`CONSTRAINT_EPSILON`] at both bounds and for `exact`.
///
/// # Specification
///
/// See [ConstrainDouble](https://www.w3.org/TR/mediacapture-streams/#dom-constraindouble).
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleConstraint {
    name: &'static str,
    min: Option<f64>,
    max: Option<f64>,
    exact: Option<f64>,
    ideal: Option<f64>,
}

impl DoubleConstraint {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            min: None,
            max: None,
            exact: None,
            ideal: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn exact(&self) -> Option<f64> {
        self.exact
    }

    pub fn ideal(&self) -> Option<f64> {
        self.ideal
    }

    pub fn set_min(&mut self, value: f64) {
        self.min = Some(value);
    }

    pub fn set_max(&mut self, value: f64) {
        self.max = Some(value);
    }

    pub fn set_exact(&mut self, value: f64) {
        self.exact = Some(value);
    }

    pub fn set_ideal(&mut self, value: f64) {
        self.ideal = Some(value);
    }

    pub fn with_min(mut self, value: f64) -> Self {
        self.set_min(value);
        self
    }

    pub fn with_max(mut self, value: f64) -> Self {
        self.set_max(value);
        self
    }

    pub fn with_exact(mut self, value: f64) -> Self {
        self.set_exact(value);
        self
    }

    pub fn with_ideal(mut self, value: f64) -> Self {
        self.set_ideal(value);
        self
    }

    pub fn has_min(&self) -> bool {
        self.min.is_some()
    }

    pub fn has_max(&self) -> bool {
        self.max.is_some()
    }

    pub fn has_exact(&self) -> bool {
        self.exact.is_some()
    }

    pub fn has_ideal(&self) -> bool {
        self.ideal.is_some()
    }

    pub fn is_constrained(&self) -> bool {
        self.min.is_some() || self.max.is_some() || self.exact.is_some() || self.ideal.is_some()
    }

    pub fn matches(&self, value: f64) -> bool {
        if self.min.is_some_and(|min| value < min - CONSTRAINT_EPSILON) {
            return false;
        }
        if self.max.is_some_and(|max| value > max + CONSTRAINT_EPSILON) {
            return false;
        }
        if self
            .exact
            .is_some_and(|exact| (value - exact).abs() > CONSTRAINT_EPSILON)
        {
            return false;
        }
        true
    }

    pub fn exact_or_ideal(&self) -> Option<f64> {
        self.exact.or(self.ideal)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.name);
    }
}

impl NumericConstraint for DoubleConstraint {
    type Value = f64;

    fn name(&self) -> &'static str {
        self.name
    }

    fn min(&self) -> Option<f64> {
        self.min
    }

    fn max(&self) -> Option<f64> {
        self.max
    }

    fn exact(&self) -> Option<f64> {
        self.exact
    }

    fn ideal(&self) -> Option<f64> {
        self.ideal
    }
}

impl fmt::Display for DoubleConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut values = NamedValues::new(f);
        values.emit("min", self.min)?;
        values.emit("max", self.max)?;
        values.emit("exact", self.exact)?;
        values.emit("ideal", self.ideal)?;
        write!(f, "}}")
    }
}

/// A string-valued constraint such as `deviceId` or `facingMode`.
///
/// String constraints have no bounds. Both `ideal` and `exact` are sets of
/// acceptable alternatives, e.g. several device ids.
///
/// # Specification
///
/// See [ConstrainDOMString](https://www.w3.org/TR/mediacapture-streams/#dom-constraindomstring).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringConstraint {
    name: &'static str,
    exact: Vec<String>,
    ideal: Vec<String>,
}

impl StringConstraint {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            exact: Vec::new(),
            ideal: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn exact(&self) -> &[String] {
        &self.exact
    }

    pub fn ideal(&self) -> &[String] {
        &self.ideal
    }

    pub fn set_exact<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exact = values.into_iter().map(Into::into).collect();
    }

    pub fn set_ideal<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ideal = values.into_iter().map(Into::into).collect();
    }

    pub fn with_exact<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_exact(values);
        self
    }

    pub fn with_ideal<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_ideal(values);
        self
    }

    pub fn has_exact(&self) -> bool {
        !self.exact.is_empty()
    }

    pub fn has_ideal(&self) -> bool {
        !self.ideal.is_empty()
    }

    pub fn is_constrained(&self) -> bool {
        !self.exact.is_empty() || !self.ideal.is_empty()
    }

    /// An empty `exact` set accepts everything.
    pub fn matches(&self, value: &str) -> bool {
        self.exact.is_empty() || self.exact.iter().any(|choice| choice == value)
    }

    pub fn exact_or_ideal(&self) -> &[String] {
        if self.exact.is_empty() {
            &self.ideal
        } else {
            &self.exact
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.name);
    }
}

impl fmt::Display for StringConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut values = NamedValues::new(f);
        values.emit_strings("ideal", &self.ideal)?;
        values.emit_strings("exact", &self.exact)?;
        write!(f, "}}")
    }
}

/// A boolean constraint such as `echoCancellation`.
///
/// # Specification
///
/// See [ConstrainBoolean](https://www.w3.org/TR/mediacapture-streams/#dom-constrainboolean).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanConstraint {
    name: &'static str,
    exact: Option<bool>,
    ideal: Option<bool>,
}

impl BooleanConstraint {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            exact: None,
            ideal: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn exact(&self) -> Option<bool> {
        self.exact
    }

    pub fn ideal(&self) -> Option<bool> {
        self.ideal
    }

    pub fn set_exact(&mut self, value: bool) {
        self.exact = Some(value);
    }

    pub fn set_ideal(&mut self, value: bool) {
        self.ideal = Some(value);
    }

    pub fn with_exact(mut self, value: bool) -> Self {
        self.set_exact(value);
        self
    }

    pub fn with_ideal(mut self, value: bool) -> Self {
        self.set_ideal(value);
        self
    }

    pub fn has_exact(&self) -> bool {
        self.exact.is_some()
    }

    pub fn has_ideal(&self) -> bool {
        self.ideal.is_some()
    }

    pub fn is_constrained(&self) -> bool {
        self.exact.is_some() || self.ideal.is_some()
    }

    pub fn matches(&self, value: bool) -> bool {
        self.exact.is_none_or(|exact| exact == value)
    }

    pub fn exact_or_ideal(&self) -> Option<bool> {
        self.exact.or(self.ideal)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.name);
    }
}

impl fmt::Display for BooleanConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut values = NamedValues::new(f);
        values.emit("exact", self.exact)?;
        values.emit("ideal", self.ideal)?;
        write!(f, "}}")
    }
}

/// A borrowed view over any constraint kind, used to walk every field of a
/// constraint set generically.
#[derive(Debug, Clone, Copy)]
pub enum BaseConstraint<'a> {
    Long(&'a LongConstraint),
    Double(&'a DoubleConstraint),
    String(&'a StringConstraint),
    Boolean(&'a BooleanConstraint),
}

impl BaseConstraint<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            BaseConstraint::Long(c) => c.name(),
            BaseConstraint::Double(c) => c.name(),
            BaseConstraint::String(c) => c.name(),
            BaseConstraint::Boolean(c) => c.name(),
        }
    }

    pub fn is_constrained(&self) -> bool {
        match self {
            BaseConstraint::Long(c) => c.is_constrained(),
            BaseConstraint::Double(c) => c.is_constrained(),
            BaseConstraint::String(c) => c.is_constrained(),
            BaseConstraint::Boolean(c) => c.is_constrained(),
        }
    }

    /// Strings and booleans have no bounds.
    pub fn has_min(&self) -> bool {
        match self {
            BaseConstraint::Long(c) => c.has_min(),
            BaseConstraint::Double(c) => c.has_min(),
            BaseConstraint::String(_) | BaseConstraint::Boolean(_) => false,
        }
    }

    pub fn has_max(&self) -> bool {
        match self {
            BaseConstraint::Long(c) => c.has_max(),
            BaseConstraint::Double(c) => c.has_max(),
            BaseConstraint::String(_) | BaseConstraint::Boolean(_) => false,
        }
    }

    pub fn has_exact(&self) -> bool {
        match self {
            BaseConstraint::Long(c) => c.has_exact(),
            BaseConstraint::Double(c) => c.has_exact(),
            BaseConstraint::String(c) => c.has_exact(),
            BaseConstraint::Boolean(c) => c.has_exact(),
        }
    }

    /// Whether the constraint carries any hard requirement.
    pub fn has_mandatory(&self) -> bool {
        self.has_min() || self.has_max() || self.has_exact()
    }
}

impl fmt::Display for BaseConstraint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseConstraint::Long(c) => fmt::Display::fmt(c, f),
            BaseConstraint::Double(c) => fmt::Display::fmt(c, f),
            BaseConstraint::String(c) => fmt::Display::fmt(c, f),
            BaseConstraint::Boolean(c) => fmt::Display::fmt(c, f),
        }
    }
}
