//! DOM bindings

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement};

use crate::sim::Field;
use crate::ui::{Hud, Locale};

/// CSS class that hides the banner
const HIDDEN_CLASS: &str = "hidden";

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Look up a required element by id
pub fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

pub fn canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
    element(document, id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not a canvas")))
}

/// Field size, read once from the canvas' drawing buffer
pub fn field_of(canvas: &HtmlCanvasElement) -> Field {
    Field::new(canvas.width() as f32, canvas.height() as f32)
}

/// Locale from `<html lang>`, falling back to the default
pub fn document_locale(document: &Document) -> Locale {
    document
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        .and_then(|lang| Locale::from_lang(&lang))
        .unwrap_or_default()
}

/// Score texts and game-over banner in the page
pub struct DomHud {
    player_score: Element,
    ai_score: Element,
    banner: Element,
}

impl DomHud {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            player_score: element(document, "playerScore")?,
            ai_score: element(document, "aiScore")?,
            banner: element(document, "gameOver")?,
        })
    }
}

impl Hud for DomHud {
    fn set_player_score(&mut self, text: &str) {
        self.player_score.set_text_content(Some(text));
    }

    fn set_ai_score(&mut self, text: &str) {
        self.ai_score.set_text_content(Some(text));
    }

    fn show_banner(&mut self, text: &str) {
        self.banner.set_text_content(Some(text));
        let _ = self.banner.class_list().remove_1(HIDDEN_CLASS);
    }

    fn hide_banner(&mut self) {
        self.banner.set_text_content(None);
        let _ = self.banner.class_list().add_1(HIDDEN_CLASS);
    }
}
