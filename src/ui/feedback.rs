use html_escape::{encode_double_quoted_attribute, encode_text};

use super::document::Document;
use crate::{
    app::state::UnitPreference,
    domain::weather::{Theme, extract_hour, lookup, theme_at},
};

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Writes `message` into the target and fades it in; an empty message
/// clears and hides it. Unknown ids are ignored.
pub fn show_error(doc: &mut impl Document, target_id: &str, message: &str) {
    let Some(element) = doc.element_mut(target_id) else {
        return;
    };
    element.set_text(message);
    if message.is_empty() {
        element.set_style("opacity", "0");
        element.set_style("transform", "translateY(-4px)");
    } else {
        element.set_style("opacity", "1");
        element.set_style("transform", "translateY(0)");
    }
}

pub fn clear_error(doc: &mut impl Document, target_id: &str) {
    show_error(doc, target_id, "");
}

/// Tags the body with the theme for `code` at the hour found in `time`
/// (current local hour when `time` is `None`).
pub fn set_theme(doc: &mut impl Document, code: i32, time: Option<&str>) -> Theme {
    let theme = theme_at(code, extract_hour(time));
    doc.body_mut().set_attribute(THEME_ATTRIBUTE, theme.as_str());
    theme
}

pub struct UnitToggle<F> {
    button_id: String,
    on_toggle: Option<F>,
}

impl<F> std::fmt::Debug for UnitToggle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitToggle")
            .field("button_id", &self.button_id)
            .field("has_callback", &self.on_toggle.is_some())
            .finish()
    }
}

/// Binds the unit toggle to `button_id`. Returns `None` when the button is
/// not present in the document.
pub fn bind_unit_toggle<F>(
    doc: &mut impl Document,
    button_id: &str,
    on_toggle: Option<F>,
) -> Option<UnitToggle<F>>
where
    F: FnMut(&UnitPreference),
{
    doc.element_mut(button_id)?;
    Some(UnitToggle {
        button_id: button_id.to_string(),
        on_toggle,
    })
}

impl<F> UnitToggle<F>
where
    F: FnMut(&UnitPreference),
{
    /// One press of the button: flip units, relabel, then reload via the
    /// caller's callback.
    pub fn click(&mut self, doc: &mut impl Document, prefs: &mut UnitPreference) {
        prefs.toggle();
        if let Some(button) = doc.element_mut(&self.button_id) {
            button.set_text(prefs.toggle_label());
        }
        if let Some(on_toggle) = self.on_toggle.as_mut() {
            on_toggle(&*prefs);
        }
    }
}

/// Material Symbols markup for a weather code.
pub fn weather_icon_html(code: i32, is_night: bool, size_class: &str) -> String {
    let info = lookup(code, is_night);
    format!(
        "<span class=\"material-symbols-outlined {} {} drop-shadow-[0_0_8px_currentColor] transition-all duration-500\">{}</span>",
        encode_double_quoted_attribute(size_class),
        info.color_class,
        encode_text(info.icon),
    )
}
