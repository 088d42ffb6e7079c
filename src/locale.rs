//! Label text for the rendered chart.

use serde::Serialize;

/// Language of the chart labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Traditional Chinese
    #[default]
    Zh,
    /// English; also used for unrecognized selectors
    En,
}

impl Locale {
    /// Resolve a locale selector such as `"zh"` or `"EN"`.
    ///
    /// Unknown selectors fall back to English and log a warning.
    #[must_use]
    pub fn resolve(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "zh" => Self::Zh,
            "en" => Self::En,
            _ => {
                tracing::warn!(
                    locale = selector,
                    "Unknown language code; defaulting to English ('en')"
                );
                Self::En
            }
        }
    }

    /// Language code for the `lang` attribute and file names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    #[must_use]
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::Zh => &ZH,
            Self::En => &EN,
        }
    }
}

/// Localized strings used by the renderer.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    seat_prefix: &'static str,
    row_prefix: &'static str,
    row_suffix: &'static str,
    pub empty_seat: &'static str,
    pub seed_caption: &'static str,
}

impl Labels {
    /// Column header for the 1-based seat number `n`.
    #[must_use]
    pub fn seat(&self, n: usize) -> String {
        format!("{}{n}", self.seat_prefix)
    }

    /// Row header for the 1-based row number `n`.
    #[must_use]
    pub fn row(&self, n: usize) -> String {
        format!("{}{n}{}", self.row_prefix, self.row_suffix)
    }
}

static ZH: Labels = Labels {
    title: "考試座位表",
    seat_prefix: "座位 ",
    row_prefix: "第",
    row_suffix: "排",
    empty_seat: "空",
    seed_caption: "Random State: ",
};

static EN: Labels = Labels {
    title: "Exam Seating Chart",
    seat_prefix: "Seat ",
    row_prefix: "Row ",
    row_suffix: "",
    empty_seat: "Empty",
    seed_caption: "Random State: ",
};
