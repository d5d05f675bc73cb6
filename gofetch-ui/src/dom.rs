use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::render::escape_html;

pub const SEARCH_FORM_ID: &str = "search-form";
pub const QUERY_INPUT_ID: &str = "query";
pub const RESULTS_ID: &str = "results";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Form,
    TextInput,
    Container,
}

impl ElementKind {
    fn name(self) -> &'static str {
        match self {
            ElementKind::Form => "form",
            ElementKind::TextInput => "text input",
            ElementKind::Container => "container",
        }
    }
}

/// A node addressed by id. Text inputs keep their value in `content`,
/// containers their inner markup; forms keep nothing.
#[derive(Debug, Clone)]
pub struct Element {
    id: String,
    kind: ElementKind,
    owner_form: Option<String>,
    content: Arc<Mutex<String>>,
}

impl Element {
    fn new(id: &str, kind: ElementKind, owner_form: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            kind,
            owner_form: owner_form.map(str::to_string),
            content: Arc::new(Mutex::new(String::new())),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        // a panicking writer leaves a complete String behind; keep using it
        self.content.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Debug, Clone)]
pub struct Form(Element);

impl Form {
    pub fn id(&self) -> &str {
        self.0.id()
    }
}

#[derive(Debug, Clone)]
pub struct TextInput(Element);

impl TextInput {
    pub fn value(&self) -> String {
        self.0.lock().clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.0.lock() = value.into();
    }
}

/// Results container. Clones share the same markup.
#[derive(Debug, Clone)]
pub struct Container(Element);

impl Container {
    pub fn inner_html(&self) -> String {
        self.0.lock().clone()
    }

    pub fn set_inner_html(&self, html: impl Into<String>) {
        *self.0.lock() = html.into();
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }

    /// Exclusive access to the markup; writers that must check-then-write
    /// hold this guard across both steps.
    pub fn lock(&self) -> MutexGuard<'_, String> {
        self.0.lock()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("element #{0} not found")]
    Missing(String),
    #[error("element #{id} is a {actual}, expected a {expected}")]
    WrongKind {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, Default, Clone)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page the search front-end expects: a form holding the query input,
    /// followed by the results list.
    pub fn search_page() -> Self {
        let mut doc = Self::new();
        doc.insert(SEARCH_FORM_ID, ElementKind::Form);
        doc.insert_input(QUERY_INPUT_ID, SEARCH_FORM_ID);
        doc.insert(RESULTS_ID, ElementKind::Container);
        doc
    }

    /// Add an element; an existing element with the same id is replaced.
    pub fn insert(&mut self, id: &str, kind: ElementKind) {
        self.put(Element::new(id, kind, None));
    }

    /// Add a text input owned by the form `form_id`.
    pub fn insert_input(&mut self, id: &str, form_id: &str) {
        self.put(Element::new(id, ElementKind::TextInput, Some(form_id)));
    }

    fn put(&mut self, el: Element) {
        self.elements.retain(|e| e.id != el.id);
        self.elements.push(el);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn expect_kind(&self, id: &str, kind: ElementKind) -> Result<Element, BindError> {
        let el = self
            .get(id)
            .ok_or_else(|| BindError::Missing(id.to_string()))?;
        if el.kind != kind {
            return Err(BindError::WrongKind {
                id: id.to_string(),
                expected: kind.name(),
                actual: el.kind.name(),
            });
        }
        Ok(el.clone())
    }

    pub fn form(&self, id: &str) -> Result<Form, BindError> {
        self.expect_kind(id, ElementKind::Form).map(Form)
    }

    pub fn text_input(&self, id: &str) -> Result<TextInput, BindError> {
        self.expect_kind(id, ElementKind::TextInput).map(TextInput)
    }

    pub fn container(&self, id: &str) -> Result<Container, BindError> {
        self.expect_kind(id, ElementKind::Container).map(Container)
    }

    /// Serialize the page with the current input values and container markup.
    pub fn to_html(&self) -> String {
        self.serialize(None)
    }

    /// Like [`Document::to_html`], but container `id` is rendered with
    /// `markup` instead of whatever it holds now.
    pub fn to_html_with(&self, id: &str, markup: &str) -> String {
        self.serialize(Some((id, markup)))
    }

    fn serialize(&self, pinned: Option<(&str, &str)>) -> String {
        let mut body = String::new();
        for el in &self.elements {
            match el.kind {
                ElementKind::Form => {
                    body.push_str(&format!("    <form id=\"{}\">\n", escape_html(&el.id)));
                    for input in self
                        .elements
                        .iter()
                        .filter(|i| i.owner_form.as_deref() == Some(el.id.as_str()))
                    {
                        body.push_str(&format!("      {}\n", input_html(input)));
                    }
                    body.push_str("      <button type=\"submit\">Search</button>\n    </form>\n");
                }
                ElementKind::TextInput if el.owner_form.is_none() => {
                    body.push_str(&format!("    {}\n", input_html(el)));
                }
                ElementKind::TextInput => {}
                ElementKind::Container => {
                    let inner = match pinned {
                        Some((id, markup)) if id == el.id => markup.to_string(),
                        _ => el.lock().clone(),
                    };
                    body.push_str(&format!(
                        "    <ul id=\"{}\">{}</ul>\n",
                        escape_html(&el.id),
                        inner
                    ));
                }
            }
        }
        format!(
            "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\" />\n    <title>GoFetch Search</title>\n  </head>\n  <body>\n{body}  </body>\n</html>\n"
        )
    }
}

fn input_html(el: &Element) -> String {
    format!(
        "<input id=\"{}\" type=\"text\" placeholder=\"Search...\" autocomplete=\"off\" value=\"{}\" />",
        escape_html(&el.id),
        escape_html(&el.lock())
    )
}

/// A form submission. Handlers call [`SubmitEvent::prevent_default`] to keep
/// the host from performing its own navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    form_id: String,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            default_prevented: false,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The three elements the search front-end binds to.
#[derive(Debug, Clone)]
pub struct SearchView {
    pub form: Form,
    pub input: TextInput,
    pub results: Container,
}

impl SearchView {
    /// Look up `#search-form`, `#query` and `#results`.
    pub fn bind(doc: &Document) -> Result<Self, BindError> {
        Ok(Self {
            form: doc.form(SEARCH_FORM_ID)?,
            input: doc.text_input(QUERY_INPUT_ID)?,
            results: doc.container(RESULTS_ID)?,
        })
    }
}
