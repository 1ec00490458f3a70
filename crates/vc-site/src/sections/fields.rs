#![forbid(unsafe_code)]

//! Form controls shared by the checkout and contact forms.

use vc_forms::{Acknowledgment, FieldError};
use vc_i18n::Translator;
use vc_motion::Tween;
use vc_style::FieldState;
use vc_style::form::{FIELD_ERROR, FIELD_LABEL};

use crate::html::{Attrs, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Input(&'static str),
    TextArea,
}

/// One labelled control.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    pub control: Control,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
    pub required: bool,
    pub error: Option<&'a FieldError>,
    pub motion: Option<&'a Tween>,
}

/// Label, inline error and control. The error text is looked up with
/// `errors` (the catalog root).
pub fn field(html: &mut Markup, form_id: &str, field: &Field<'_>, errors: &Translator<'_>) {
    let id = format!("{form_id}-{}", field.name);
    let state = FieldState::from_error(field.error.is_some());

    html.open("div", Attrs::new().class("flex flex-col gap-2").motion(field.motion));
    html.open("div", Attrs::new().class("flex items-center justify-between"));
    html.open("label", Attrs::new().set("for", &id).class(FIELD_LABEL));
    html.text(field.label);
    if field.required {
        html.element("span", Attrs::new().class("text-red-500"), " *");
    }
    html.close("label");
    if let Some(error) = field.error {
        html.element(
            "span",
            Attrs::new()
                .set("id", format!("{id}-error"))
                .set("role", "alert")
                .class(FIELD_ERROR),
            errors.t(error.message_key),
        );
    }
    html.close("div");

    let attrs = Attrs::new()
        .set("id", &id)
        .set("name", field.name)
        .set("placeholder", field.placeholder)
        .class(state.input_classes())
        .set_if(field.error.is_some(), "aria-invalid", "true")
        .set_if(field.error.is_some(), "aria-describedby", format!("{id}-error"));
    match field.control {
        Control::Input(kind) => {
            let attrs = attrs.set("type", kind).set("value", field.value);
            let attrs = if field.required {
                attrs.flag("required")
            } else {
                attrs
            };
            html.void("input", attrs);
        }
        Control::TextArea => {
            html.element("textarea", attrs.set("rows", 5), field.value);
        }
    }
    html.close("div");
}

/// Banner for a finished submission; nothing for a rejected one, whose
/// errors are shown per field.
pub fn acknowledgment(html: &mut Markup, ack: Option<&Acknowledgment>, t: &Translator<'_>) {
    let Some(ack) = ack else {
        return;
    };
    let Some(key) = ack.message_key() else {
        return;
    };
    let classes = if ack.is_success() {
        "rounded-lg bg-green-50 p-4 text-green-700"
    } else {
        "rounded-lg bg-red-50 p-4 text-red-700"
    };
    html.element(
        "div",
        Attrs::new().set("role", "status").class(classes),
        t.t(key),
    );
}

#[cfg(test)]
mod tests {
    use vc_forms::{ContactForm, Form, FormState};
    use vc_i18n::{Locale, Translator};

    use super::*;

    #[test]
    fn invalid_field_shows_translated_error() {
        let catalog = vc_i18n::bundled().unwrap();
        let root = Translator::new(&catalog, Locale::En);
        let mut form: FormState<ContactForm> = FormState::new();
        let _ = form.submit();
        let mut html = Markup::new();
        field(
            &mut html,
            "contact",
            &Field {
                name: "name",
                control: Control::Input("text"),
                label: "Name",
                placeholder: "Your name",
                value: &form.values().name,
                required: true,
                error: form.error_for("name"),
                motion: None,
            },
            &root,
        );
        let out = html.finish();
        assert!(out.contains("Name must be at least 2 characters"));
        assert!(out.contains("aria-invalid=\"true\""));
        assert!(out.contains("border-red-500"));
        assert!(out.contains(" required"));
        assert_eq!(ContactForm::FIELDS.len(), 4);
    }

    #[test]
    fn acknowledgment_banner() {
        let catalog = vc_i18n::bundled().unwrap();
        let root = Translator::new(&catalog, Locale::En);
        let mut html = Markup::new();
        acknowledgment(
            &mut html,
            Some(&Acknowledgment::Success {
                message_key: "contact.successMessage",
            }),
            &root,
        );
        acknowledgment(
            &mut html,
            Some(&Acknowledgment::Rejected { errors: Vec::new() }),
            &root,
        );
        acknowledgment(&mut html, None, &root);
        let out = html.finish();
        assert_eq!(out.matches("role=\"status\"").count(), 1);
        assert!(out.contains("Your message has been sent"));
    }
}
