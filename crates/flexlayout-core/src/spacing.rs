//! Spacing scale tokens and the parser that turns them into utility classes.
//!
//! Blocks receive spacing as loose scale tokens (`3`, `"3"`) straight from
//! their props. The parser validates each token against the twelve-step
//! spacing scale and renders it as a utility-class fragment such as `pb5`
//! or `ml3`.
//!
//! # Examples
//!
//! ```
//! use flexlayout_core::{parse_margins, Sides, SpacingToken};
//!
//! let sides = Sides::new().left(3).right("2");
//! let classes = parse_margins(&sides).unwrap();
//! assert_eq!(classes, vec!["mr2".to_string(), "ml3".to_string()]);
//!
//! assert!(SpacingToken::from("huge").to_step("rowGap").is_err());
//! ```

use crate::env::LayoutEnv;
use crate::error::SpacingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest step on the spacing scale.
pub const MAX_STEP: u8 = 11;

/// Size of each scale step in rem.
const SCALE_REM: [f32; MAX_STEP as usize + 1] =
    [0.0, 0.125, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0, 4.0, 8.0, 16.0];

/// Root font size used to convert rem to px.
const ROOT_FONT_PX: f32 = 16.0;

/// A raw spacing value as it appears in block props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpacingToken {
    /// Integer literal (`3`)
    Integer(i64),
    /// Non-integer literal (`2.5`), always rejected by the parser
    Float(f64),
    /// Step given as text (`"3"`)
    Text(String),
}

impl SpacingToken {
    /// Resolve this token to a scale step.
    ///
    /// `prop` names the prop the token came from and is only used for the
    /// error message.
    pub fn to_step(&self, prop: &str) -> Result<SpacingStep, SpacingError> {
        parse_token(prop, self)
    }
}

impl fmt::Display for SpacingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<u8> for SpacingToken {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i32> for SpacingToken {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for SpacingToken {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SpacingToken {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SpacingToken {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SpacingToken {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<SpacingStep> for SpacingToken {
    fn from(step: SpacingStep) -> Self {
        Self::Integer(i64::from(step.value()))
    }
}

/// A validated step on the spacing scale (`0..=11`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct SpacingStep(u8);

impl SpacingStep {
    /// No spacing.
    pub const ZERO: Self = Self(0);

    /// Create a step, or `None` when it is off the scale.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_STEP {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Step number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is the zero step.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Concrete size in rem.
    #[must_use]
    pub const fn rem(self) -> f32 {
        SCALE_REM[self.0 as usize]
    }

    /// Concrete size in px.
    #[must_use]
    pub fn px(self) -> f32 {
        self.rem() * ROOT_FONT_PX
    }

    /// Utility class for this step, e.g. `pb5` for prefix `pb`.
    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}{}", self.0)
    }

    /// Utility class applied from the not-small breakpoint up, e.g. `pr2-ns`.
    #[must_use]
    pub fn class_ns(self, prefix: &str) -> String {
        format!("{prefix}{}-ns", self.0)
    }
}

impl fmt::Display for SpacingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SpacingStep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = SpacingToken::deserialize(deserializer)?;
        parse_token("spacing", &token).map_err(serde::de::Error::custom)
    }
}

/// Parse a single spacing token.
///
/// Accepts integers and integer strings (surrounding whitespace allowed) in
/// `0..=MAX_STEP`. Everything else is rejected.
pub fn parse_token(prop: &str, token: &SpacingToken) -> Result<SpacingStep, SpacingError> {
    let step = match token {
        SpacingToken::Integer(n) => u8::try_from(*n).ok().and_then(SpacingStep::new),
        SpacingToken::Float(_) => None,
        SpacingToken::Text(s) => parse_digits(s.trim()).and_then(SpacingStep::new),
    };

    step.ok_or_else(|| SpacingError::InvalidSpacingToken {
        prop: prop.to_string(),
        value: token.to_string(),
        max: MAX_STEP,
    })
}

// Plain ASCII digits only; `str::parse` would also take a leading `+`.
fn parse_digits(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Resolved gaps between children of a layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gaps {
    /// Horizontal gap between columns
    pub col_gap: SpacingStep,
    /// Vertical gap between rows
    pub row_gap: SpacingStep,
}

impl Gaps {
    /// No gaps.
    pub const NONE: Self = Self {
        col_gap: SpacingStep::ZERO,
        row_gap: SpacingStep::ZERO,
    };

    /// Create gaps from two steps.
    #[must_use]
    pub const fn new(col_gap: SpacingStep, row_gap: SpacingStep) -> Self {
        Self { col_gap, row_gap }
    }
}

/// Resolve container gaps.
///
/// Gaps given on the block win; absent gaps are inherited from the
/// environment the block is rendered in.
pub fn parse_gaps(
    col_gap: Option<&SpacingToken>,
    row_gap: Option<&SpacingToken>,
    env: &LayoutEnv,
) -> Result<Gaps, SpacingError> {
    let col_gap = match col_gap {
        Some(token) => parse_token("colGap", token)?,
        None => env.col_gap(),
    };
    let row_gap = match row_gap {
        Some(token) => parse_token("rowGap", token)?,
        None => env.row_gap(),
    };
    Ok(Gaps { col_gap, row_gap })
}

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
}

impl Side {
    /// All sides in class output order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    const fn letter(self) -> char {
        match self {
            Self::Top => 't',
            Self::Right => 'r',
            Self::Bottom => 'b',
            Self::Left => 'l',
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Right => "Right",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
        }
    }
}

/// Whether a side set describes margins or paddings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoxSpacing {
    Margin,
    Padding,
}

impl BoxSpacing {
    const fn letter(self) -> char {
        match self {
            Self::Margin => 'm',
            Self::Padding => 'p',
        }
    }

    const fn prop_prefix(self) -> &'static str {
        match self {
            Self::Margin => "margin",
            Self::Padding => "padding",
        }
    }
}

/// Optional spacing tokens for each side of a box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    /// Top edge
    pub top: Option<SpacingToken>,
    /// Right edge
    pub right: Option<SpacingToken>,
    /// Bottom edge
    pub bottom: Option<SpacingToken>,
    /// Left edge
    pub left: Option<SpacingToken>,
}

impl Sides {
    /// No spacing on any side.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top token.
    #[must_use]
    pub fn top(mut self, token: impl Into<SpacingToken>) -> Self {
        self.top = Some(token.into());
        self
    }

    /// Set the right token.
    #[must_use]
    pub fn right(mut self, token: impl Into<SpacingToken>) -> Self {
        self.right = Some(token.into());
        self
    }

    /// Set the bottom token.
    #[must_use]
    pub fn bottom(mut self, token: impl Into<SpacingToken>) -> Self {
        self.bottom = Some(token.into());
        self
    }

    /// Set the left token.
    #[must_use]
    pub fn left(mut self, token: impl Into<SpacingToken>) -> Self {
        self.left = Some(token.into());
        self
    }

    /// Token for a side.
    #[must_use]
    pub const fn get(&self, side: Side) -> Option<&SpacingToken> {
        match side {
            Side::Top => self.top.as_ref(),
            Side::Right => self.right.as_ref(),
            Side::Bottom => self.bottom.as_ref(),
            Side::Left => self.left.as_ref(),
        }
    }
}

/// Resolve margin tokens to classes (`mt`, `mr`, `mb`, `ml`).
///
/// Sides without a token contribute nothing.
pub fn parse_margins(sides: &Sides) -> Result<Vec<String>, SpacingError> {
    parse_sides(BoxSpacing::Margin, sides)
}

/// Resolve padding tokens to classes (`pt`, `pr`, `pb`, `pl`).
///
/// Sides without a token contribute nothing.
pub fn parse_paddings(sides: &Sides) -> Result<Vec<String>, SpacingError> {
    parse_sides(BoxSpacing::Padding, sides)
}

fn parse_sides(kind: BoxSpacing, sides: &Sides) -> Result<Vec<String>, SpacingError> {
    let mut classes = Vec::new();
    for side in Side::ALL {
        let Some(token) = sides.get(side) else {
            continue;
        };
        let prop = format!("{}{}", kind.prop_prefix(), side.name());
        let step = parse_token(&prop, token)?;
        let prefix: String = [kind.letter(), side.letter()].iter().collect();
        classes.push(step.class(&prefix));
    }
    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ParentKind;
    use proptest::prelude::*;

    #[test]
    fn test_parse_integer_token() {
        let step = parse_token("rowGap", &SpacingToken::from(5)).unwrap();
        assert_eq!(step.value(), 5);
    }

    #[test]
    fn test_parse_text_token_trims() {
        let step = parse_token("rowGap", &SpacingToken::from(" 7 ")).unwrap();
        assert_eq!(step.value(), 7);
    }

    #[test]
    fn test_parse_scale_bounds() {
        assert!(parse_token("colGap", &SpacingToken::from(0)).is_ok());
        assert!(parse_token("colGap", &SpacingToken::from(11)).is_ok());
        assert!(parse_token("colGap", &SpacingToken::from(12)).is_err());
        assert!(parse_token("colGap", &SpacingToken::from(-1)).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for token in [
            SpacingToken::from(""),
            SpacingToken::from("large"),
            SpacingToken::from("3px"),
            SpacingToken::from("+3"),
            SpacingToken::from("-0"),
            SpacingToken::from("0x3"),
            SpacingToken::from(2.5),
        ] {
            assert!(parse_token("marginLeft", &token).is_err(), "{token}");
        }
    }

    #[test]
    fn test_parse_error_names_prop_and_value() {
        let err = parse_token("marginLeft", &SpacingToken::from("big")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("marginLeft"));
        assert!(msg.contains("big"));
    }

    #[test]
    fn test_step_sizes() {
        let step = SpacingStep::new(5).unwrap();
        assert_eq!(step.rem(), 1.0);
        assert_eq!(step.px(), 16.0);
        assert_eq!(SpacingStep::new(11).unwrap().px(), 256.0);
        assert_eq!(SpacingStep::ZERO.px(), 0.0);
    }

    #[test]
    fn test_step_classes() {
        let step = SpacingStep::new(3).unwrap();
        assert_eq!(step.class("pb"), "pb3");
        assert_eq!(step.class_ns("pr"), "pr3-ns");
    }

    #[test]
    fn test_step_deserialize() {
        let step: SpacingStep = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(step.value(), 4);
        assert!(serde_json::from_str::<SpacingStep>("40").is_err());
    }

    #[test]
    fn test_gaps_inherit_from_env() {
        let inherited = Gaps::new(SpacingStep::new(2).unwrap(), SpacingStep::new(6).unwrap());
        let env = LayoutEnv::provide(ParentKind::Row, inherited);

        let gaps = parse_gaps(None, None, &env).unwrap();
        assert_eq!(gaps, inherited);

        let own = SpacingToken::from(1);
        let gaps = parse_gaps(None, Some(&own), &env).unwrap();
        assert_eq!(gaps.col_gap.value(), 2);
        assert_eq!(gaps.row_gap.value(), 1);
    }

    #[test]
    fn test_gaps_error_names_gap_prop() {
        let bad = SpacingToken::from("x");
        let err = parse_gaps(Some(&bad), None, &LayoutEnv::root()).unwrap_err();
        assert!(err.to_string().contains("colGap"));
    }

    #[test]
    fn test_margins_absent_sides_contribute_nothing() {
        assert!(parse_margins(&Sides::new()).unwrap().is_empty());
        assert_eq!(parse_margins(&Sides::new().left(4)).unwrap(), vec!["ml4"]);
    }

    #[test]
    fn test_paddings_all_sides_in_order() {
        let sides = Sides::new().left(1).bottom(2).right(3).top(4);
        assert_eq!(
            parse_paddings(&sides).unwrap(),
            vec!["pt4", "pr3", "pb2", "pl1"]
        );
    }

    #[test]
    fn test_padding_error_names_side() {
        let err = parse_paddings(&Sides::new().right("wide")).unwrap_err();
        assert!(err.to_string().contains("paddingRight"));
    }

    proptest! {
        #[test]
        fn prop_on_scale_integers_round_trip(n in 0u8..=MAX_STEP) {
            let step = parse_token("gap", &SpacingToken::from(n)).unwrap();
            prop_assert_eq!(step.value(), n);
            let text = parse_token("gap", &SpacingToken::from(n.to_string())).unwrap();
            prop_assert_eq!(text, step);
        }

        #[test]
        fn prop_off_scale_integers_rejected(n in prop_oneof![i64::MIN..0i64, 12i64..i64::MAX]) {
            prop_assert!(parse_token("gap", &SpacingToken::from(n)).is_err());
        }

        #[test]
        fn prop_scale_is_monotonic(a in 0u8..MAX_STEP) {
            let lo = SpacingStep::new(a).unwrap();
            let hi = SpacingStep::new(a + 1).unwrap();
            prop_assert!(lo.rem() < hi.rem());
        }
    }
}
