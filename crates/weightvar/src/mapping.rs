//! Fixed mapping from CSS weight keywords to custom property names.

use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One of the nine three-digit numeric `font-weight` keywords.
///
/// The string form of each variant is its numeric value, so parsing `"700"`
/// yields [`WeightKeyword::Bold`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter, EnumCount,
)]
pub enum WeightKeyword {
    /// `100`
    #[strum(serialize = "100")]
    Thin,
    /// `200`
    #[strum(serialize = "200")]
    ExtraLight,
    /// `300`
    #[strum(serialize = "300")]
    Light,
    /// `400`
    #[strum(serialize = "400")]
    Regular,
    /// `500`
    #[strum(serialize = "500")]
    Medium,
    /// `600`
    #[strum(serialize = "600")]
    SemiBold,
    /// `700`
    #[strum(serialize = "700")]
    Bold,
    /// `800`
    #[strum(serialize = "800")]
    ExtraBold,
    /// `900`
    #[strum(serialize = "900")]
    Black,
}

impl WeightKeyword {
    /// Looks up the keyword for a numeric value such as `"400"`.
    ///
    /// Returns `None` for anything that is not exactly one of the nine
    /// keyword values.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// Returns the numeric value as written in CSS.
    #[must_use]
    pub fn value(self) -> &'static str {
        self.into()
    }

    /// Returns the custom property this weight is rewritten to.
    #[must_use]
    pub const fn custom_property(self) -> &'static str {
        match self {
            Self::Thin => "--m-thin",
            Self::ExtraLight => "--m-extralight",
            Self::Light => "--m-light",
            Self::Regular => "--m-regular",
            Self::Medium => "--m-medium",
            Self::SemiBold => "--m-semibold",
            Self::Bold => "--m-bold",
            Self::ExtraBold => "--m-extrabold",
            Self::Black => "--m-black",
        }
    }

    /// Iterates over all keywords in ascending weight order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// The weight mapping as `(value, custom property)` pairs, lightest first.
pub const WEIGHT_MAPPING: [(&str, &str); WeightKeyword::COUNT] = [
    ("100", "--m-thin"),
    ("200", "--m-extralight"),
    ("300", "--m-light"),
    ("400", "--m-regular"),
    ("500", "--m-medium"),
    ("600", "--m-semibold"),
    ("700", "--m-bold"),
    ("800", "--m-extrabold"),
    ("900", "--m-black"),
];

/// Returns the custom property mapped to a numeric weight value, if any.
#[must_use]
pub fn custom_property_for(value: &str) -> Option<&'static str> {
    WeightKeyword::from_value(value).map(WeightKeyword::custom_property)
}
