#![forbid(unsafe_code)]

use vc_forms::{Acknowledgment, ContactForm, Form, FormState};
use vc_style::{ButtonSize, ButtonVariant, button_classes};

use super::RenderContext;
use super::fields::{self, Control, Field};
use crate::html::{Attrs, Markup};

const CONTACT_IMAGE: &str = "/assets/images/contact/contact.png";

pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    render_form(ctx, html, &FormState::new(), None);
}

/// Section with `form` as the contact form and `ack` as the outcome of its
/// last submission.
pub fn render_form(
    ctx: &RenderContext<'_>,
    html: &mut Markup,
    form: &FormState<ContactForm>,
    ack: Option<&Acknowledgment>,
) {
    let root = ctx.root();
    let t = ctx.t("contact");
    let values = form.values();

    html.open("section", Attrs::new().set("id", "contact").class("py-20"));
    html.open(
        "div",
        Attrs::new().class("container mx-auto grid items-center gap-12 px-4 lg:grid-cols-2"),
    );

    html.open("div", Attrs::new().class("flex flex-col gap-4"));
    html.element(
        "h2",
        Attrs::new().class("text-3xl font-bold text-[#061C3D] md:text-5xl"),
        t.t("title"),
    );
    html.element("p", Attrs::new().class("text-[#BCBCBC]"), t.t("description"));
    html.void(
        "img",
        Attrs::new()
            .set("src", ctx.asset(CONTACT_IMAGE))
            .set("alt", "")
            .set("width", 520)
            .set("height", 420)
            .set("loading", "lazy")
            .class("hidden h-auto w-full max-w-md lg:block"),
    );
    html.close("div");

    html.open(
        "form",
        Attrs::new()
            .set("id", ContactForm::NAME)
            .set("method", "post")
            .flag("novalidate")
            .set("data-form", ContactForm::NAME)
            .set("data-success", t.t("successMessage"))
            .set("data-error", t.t("errorMessage"))
            .set_if(form.is_submitting(), "aria-busy", "true")
            .class("flex flex-col gap-5 rounded-3xl bg-white p-8 shadow-xl"),
    );
    fields::acknowledgment(html, ack, &root);

    let controls = [
        ("name", Control::Input("text"), values.name.as_str()),
        ("email", Control::Input("email"), values.email.as_str()),
        ("phone", Control::Input("tel"), values.phone.as_str()),
        ("message", Control::TextArea, values.message.as_str()),
    ];
    for (name, control, value) in controls {
        fields::field(
            html,
            ContactForm::NAME,
            &Field {
                name,
                control,
                label: t.t(&format!("form.{name}")),
                placeholder: t.t(&format!("form.{name}Placeholder")),
                value,
                required: true,
                error: form.error_for(name),
                motion: None,
            },
            &root,
        );
    }

    let submit = Attrs::new()
        .set("type", "submit")
        .class(button_classes(ButtonVariant::Primary, ButtonSize::Lg, "w-full"));
    let (submit, label) = if form.is_submitting() {
        (submit.flag("disabled"), t.t("form.submitting"))
    } else {
        (submit, t.t("form.submit"))
    };
    html.element("button", submit, label);
    html.close("form");

    html.close("div");
    html.close("section");
}
