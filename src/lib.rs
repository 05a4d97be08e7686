use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Callable,
    Event,
}

impl CallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Callable => "Callable",
            Self::Event => "Event",
        }
    }

    fn prefix_key(&self) -> &'static str {
        match self {
            Self::Callable => "prefix.Callable",
            Self::Event => "prefix.Event",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    fn ch(&self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    FormValues(String),
    QuotedValue(String),
    NumericValue(String),
    ScriptValue(String),
    InputValue(String),
    CheckedValue(String),
    InnerHtmlValue(String),
    PageNumber(String),
}

impl Argument {
    fn lower(&self, quote: Quote, dispatcher: &str) -> String {
        let q = quote.ch();
        match self {
            Self::FormValues(form_id) => {
                format!("{dispatcher}.getFormValues({q}{form_id}{q})")
            }
            Self::InputValue(input_id) => {
                format!("{dispatcher}.$({q}{input_id}{q}).value")
            }
            Self::CheckedValue(checkbox_id) => {
                format!("{dispatcher}.$({q}{checkbox_id}{q}).checked")
            }
            Self::InnerHtmlValue(element_id) => {
                format!("{dispatcher}.$({q}{element_id}{q}).innerHTML")
            }
            Self::QuotedValue(text) => format!("{q}{}{q}", escape_quoted(text)),
            Self::NumericValue(raw) | Self::ScriptValue(raw) | Self::PageNumber(raw) => raw.clone(),
        }
    }
}

fn escape_quoted(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '\'' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptOptions {
    options: HashMap<String, String>,
}

impl ScriptOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn get_option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct CallExpression {
    name: String,
    kind: CallKind,
    quote: Quote,
    dispatcher: String,
    slots: Vec<String>,
    page_number_index: Option<usize>,
    options: Rc<ScriptOptions>,
}

impl CallExpression {
    pub fn new(name: impl Into<String>, kind: CallKind, options: Rc<ScriptOptions>) -> Self {
        Self {
            name: name.into(),
            kind,
            quote: Quote::Double,
            dispatcher: "xajax".into(),
            slots: Vec::new(),
            page_number_index: None,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    // Arguments are lowered to text at set-time, so quote and dispatcher
    // changes affect only later set_argument/add_argument calls.
    pub fn use_single_quote(&mut self) -> &mut Self {
        self.quote = Quote::Single;
        self
    }

    pub fn use_double_quote(&mut self) -> &mut Self {
        self.quote = Quote::Double;
        self
    }

    pub fn use_dispatcher(&mut self, dispatcher: impl Into<String>) -> &mut Self {
        self.dispatcher = dispatcher.into();
        self
    }

    pub fn clear_arguments(&mut self) -> &mut Self {
        self.slots.clear();
        self.page_number_index = None;
        self
    }

    pub fn has_page_number(&self) -> bool {
        self.page_number_index.is_some()
    }

    pub fn set_page_number_value(&mut self, page_number: i64) -> &mut Self {
        if let Some(index) = self.page_number_index {
            if page_number > 0 {
                self.slots[index] = page_number.to_string();
            }
        }
        self
    }

    pub fn add_argument(&mut self, argument: Argument) -> &mut Self {
        self.set_argument(self.slots.len(), argument)
    }

    pub fn set_argument(&mut self, index: usize, argument: Argument) -> &mut Self {
        if matches!(argument, Argument::PageNumber(_)) {
            self.page_number_index = Some(index);
        }
        let rendered = argument.lower(self.quote, &self.dispatcher);
        if index >= self.slots.len() {
            self.slots.resize(index + 1, String::new());
        }
        self.slots[index] = rendered;
        self
    }

    pub fn render(&self) -> String {
        let prefix = self.options.get_option(self.kind.prefix_key()).unwrap_or("");
        format!("{prefix}{}({})", self.name, self.slots.join(", "))
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
