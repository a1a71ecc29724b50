use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexSet;
use log::{debug, error};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent};

use crate::config;
use crate::dom::listen;
use crate::error::MountError;

/// Trimmed, non-empty tags in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet(IndexSet<String>);

impl TagSet {
    /// Returns `false` when the text is blank or already present.
    pub fn insert(&mut self, text: &str) -> bool {
        let tag = text.trim();
        if tag.is_empty() {
            return false;
        }
        self.0.insert(tag.to_string())
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.shift_remove(tag)
    }

    /// Comma-joined form used by the hidden form field.
    pub fn joined(&self) -> String {
        self.to_vec().join(",")
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Tag input plus the two chip lists it keeps in sync.
pub struct TagSelector {
    document: Document,
    input: HtmlInputElement,
    edit_view: Element,
    summary_view: Element,
    tags: RefCell<TagSet>,
    on_change: Box<dyn Fn(&TagSet)>,
}

impl TagSelector {
    pub fn new(
        document: Document,
        input: HtmlInputElement,
        edit_view: Element,
        summary_view: Element,
        on_change: impl Fn(&TagSet) + 'static,
    ) -> Rc<Self> {
        Rc::new(Self {
            document,
            input,
            edit_view,
            summary_view,
            tags: RefCell::new(TagSet::default()),
            on_change: Box::new(on_change),
        })
    }

    /// Enter in the tag input adds a tag; clicks on a chip's button remove it.
    pub fn attach(self: &Rc<Self>) -> Result<(), MountError> {
        let selector = Rc::clone(self);
        listen(&self.input, "keypress", move |e: KeyboardEvent| {
            let text = selector.input.value();
            if e.key() == "Enter" && !text.trim().is_empty() {
                e.prevent_default();
                selector.input.set_value("");
                selector.add_tag(&text);
            }
        })?;

        let selector = Rc::clone(self);
        listen(&self.edit_view, "click", move |e: Event| {
            let tag = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("button[data-tag]").ok().flatten())
                .and_then(|button| button.get_attribute("data-tag"));
            if let Some(tag) = tag {
                e.prevent_default();
                selector.remove_tag(&tag);
            }
        })
    }

    pub fn tags(&self) -> TagSet {
        self.tags.borrow().clone()
    }

    pub fn add_tag(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        if !self.tags.borrow_mut().insert(text) {
            debug!("Tag {:?} already selected", text.trim());
        }
        self.changed();
    }

    pub fn remove_tag(&self, tag: &str) {
        if !self.tags.borrow_mut().remove(tag) {
            debug!("Tag {:?} was not selected", tag);
        }
        self.changed();
    }

    pub fn render_tags(&self) -> Result<(), JsValue> {
        self.edit_view.set_inner_html("");
        self.summary_view.set_inner_html("");

        for tag in self.tags.borrow().iter() {
            let chip = self.chip(tag)?;
            let remove = self.document.create_element("button")?;
            remove.set_attribute("type", "button")?;
            remove.set_attribute("data-tag", tag)?;
            remove.set_text_content(Some(config::REMOVE_TAG_LABEL));
            chip.append_child(&remove)?;
            self.edit_view.append_child(&chip)?;

            let summary_chip = self.chip(tag)?;
            self.summary_view.append_child(&summary_chip)?;
        }
        Ok(())
    }

    fn chip(&self, tag: &str) -> Result<Element, JsValue> {
        let chip = self.document.create_element("span")?;
        chip.set_class_name("tag");
        chip.set_text_content(Some(tag));
        Ok(chip)
    }

    fn changed(&self) {
        if let Err(e) = self.render_tags() {
            error!("Error rendering tags: {:?}", e);
        }
        let tags = self.tags();
        (self.on_change)(&tags);
    }
}
