use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, error, info};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Event, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};

use crate::api;
use crate::config;
use crate::dom::listen;
use crate::error::{ApiError, MountError};
use crate::models::{NewTemplate, Template};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Saving,
    Refreshing,
}

pub fn find_template<'a>(templates: &'a [Template], selected: &str) -> Option<&'a Template> {
    templates.iter().find(|t| t.id.to_string() == selected)
}

/// Message body for a selection; the placeholder or an unknown id clears it.
pub fn body_for_selection(templates: &[Template], selected: &str) -> String {
    find_template(templates, selected)
        .map(|t| t.body.clone())
        .unwrap_or_default()
}

/// `(value, text)` pairs for the select, placeholder first.
pub fn select_options(templates: &[Template]) -> Vec<(String, String)> {
    std::iter::once((String::new(), config::TEMPLATE_PLACEHOLDER.to_string()))
        .chain(templates.iter().map(|t| (t.id.to_string(), t.name.clone())))
        .collect()
}

pub fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// What a save click resolves to before any request is made.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveInput {
    /// Blank message body; the user is told and nothing is sent.
    Empty,
    /// A previous save is still in flight.
    Busy,
    /// The name prompt was cancelled or left blank.
    Cancelled,
    Submit(NewTemplate),
}

/// `ask_name` runs only once the body is known to be non-blank and no save is
/// in flight.
pub fn save_input(body: &str, busy: bool, ask_name: impl FnOnce() -> Option<String>) -> SaveInput {
    let Some(body) = non_blank(body) else {
        return SaveInput::Empty;
    };
    if busy {
        return SaveInput::Busy;
    }
    match ask_name().as_deref().and_then(non_blank) {
        Some(name) => SaveInput::Submit(NewTemplate { name, body }),
        None => SaveInput::Cancelled,
    }
}

/// Alert shown when saving fails. Only a server-provided message is surfaced verbatim.
pub fn save_failure_alert(err: &ApiError) -> String {
    match err {
        ApiError::Server { message, .. } => format!("{}{}", config::SERVER_ERROR_PREFIX, message),
        _ => config::TEMPLATE_SAVE_FAILED_ALERT.to_string(),
    }
}

pub struct TemplateManager {
    select: HtmlSelectElement,
    message: HtmlTextAreaElement,
    templates: RefCell<Vec<Template>>,
    phase: Cell<Phase>,
}

impl TemplateManager {
    pub fn new(select: HtmlSelectElement, message: HtmlTextAreaElement) -> Rc<Self> {
        Rc::new(Self {
            select,
            message,
            templates: RefCell::new(Vec::new()),
            phase: Cell::new(Phase::Idle),
        })
    }

    pub fn attach(self: &Rc<Self>, save_button: &web_sys::Element) -> Result<(), MountError> {
        let manager = Rc::clone(self);
        listen(&self.select, "change", move |_: Event| manager.on_selection_change())?;

        let manager = Rc::clone(self);
        listen(save_button, "click", move |e: MouseEvent| {
            e.prevent_default();
            manager.save_template();
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn fetch_templates(self: &Rc<Self>) {
        let manager = Rc::clone(self);
        spawn_local(async move { manager.load().await });
    }

    pub fn on_selection_change(&self) {
        let body = body_for_selection(&self.templates.borrow(), &self.select.value());
        self.message.set_value(&body);
    }

    pub fn save_template(self: &Rc<Self>) {
        let busy = self.phase() != Phase::Idle;
        let template = match save_input(&self.message.value(), busy, || prompt(config::TEMPLATE_NAME_PROMPT)) {
            SaveInput::Submit(template) => template,
            SaveInput::Empty => {
                alert(config::EMPTY_TEMPLATE_ALERT);
                return;
            }
            SaveInput::Busy => {
                debug!("Ignoring template save while {:?}", self.phase());
                return;
            }
            SaveInput::Cancelled => return,
        };

        self.phase.set(Phase::Saving);
        let manager = Rc::clone(self);
        spawn_local(async move {
            match api::create_template(&template).await {
                Ok(()) => {
                    info!("Saved template {:?}", template.name);
                    alert(config::TEMPLATE_SAVED_ALERT);
                    manager.phase.set(Phase::Refreshing);
                    manager.load().await;
                }
                Err(e) => {
                    error!("Error saving template: {}", e);
                    alert(&save_failure_alert(&e));
                }
            }
            manager.phase.set(Phase::Idle);
        });
    }

    async fn load(&self) {
        match api::list_templates().await {
            Ok(templates) => {
                if let Err(e) = self.render_options(&templates) {
                    error!("Error rendering templates: {:?}", e);
                }
                debug!("Loaded {} templates", templates.len());
                *self.templates.borrow_mut() = templates;
            }
            Err(e) => error!("Error fetching templates: {}", e),
        }
    }

    fn render_options(&self, templates: &[Template]) -> Result<(), JsValue> {
        self.select.set_inner_html("");
        for (value, text) in select_options(templates) {
            let option = HtmlOptionElement::new_with_text_and_value(&text, &value)?;
            self.select.append_child(&option)?;
        }
        Ok(())
    }
}

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// `None` when the user cancels.
fn prompt(message: &str) -> Option<String> {
    window()?
        .prompt_with_message_and_default(message, "")
        .ok()
        .flatten()
}
