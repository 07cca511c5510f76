//! Shared maud layout and formatting helpers for the HTML pages.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};

/// Class for links rendered inside table cells and paragraphs.
pub const LINK_STYLE: &str = "link";

/// Class for form submit buttons.
pub const BUTTON_PRIMARY_STYLE: &str = "button-primary";

/// Class for the vertical form container used by the add/edit/delete forms.
pub const FORM_STYLE: &str = "form";

/// Class for form field labels.
pub const FORM_LABEL_STYLE: &str = "form-label";

/// Class for text and number form inputs.
pub const FORM_INPUT_STYLE: &str = "form-input";

/// The shared page skeleton: document head, stylesheet link and body.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Tally" }
                link href="/static/main.css" rel="stylesheet";
            }

            body class="page"
            {
                (content)
            }
        }
    }
}

/// Format `number` as a currency string with a dollar sign and exactly two
/// decimal places, e.g. `-$120.50`.
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}
