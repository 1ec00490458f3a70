#![forbid(unsafe_code)]

//! Course offer with the enrollment form.

use vc_forms::{Acknowledgment, CheckoutForm, Form, FormState};
use vc_motion::SectionAnimations;
use vc_style::form::FIELD_LABEL;
use vc_style::{ButtonSize, ButtonVariant, button_classes, payment_option_classes};

use super::fields::{self, Control, Field};
use super::{RenderContext, revealed_text};
use crate::html::{Attrs, Markup};

const COURSE_IMAGE: &str = "/assets/images/course/course.png";

pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    render_form(ctx, html, &FormState::new(), None);
}

/// Section with `form` as the enrollment form and `ack` as the outcome of
/// its last submission.
pub fn render_form(
    ctx: &RenderContext<'_>,
    html: &mut Markup,
    form: &FormState<CheckoutForm>,
    ack: Option<&Acknowledgment>,
) {
    let root = ctx.root();
    let t = ctx.t("course");
    let title = t.t("title");
    let form_title = t.t("form.title");
    let motion = SectionAnimations::course(
        ctx.motion,
        title,
        form_title,
        CheckoutForm::FIELDS.len(),
    );
    let field_motion = motion.tweens("fields");
    let values = form.values();

    html.open("section", Attrs::new().set("id", "enroll").class("py-20"));
    html.open(
        "div",
        Attrs::new().class("container mx-auto grid items-start gap-12 px-4 lg:grid-cols-2"),
    );

    html.open("div", Attrs::new().class("flex flex-col gap-6"));
    html.open("div", Attrs::new().motion(motion.tween("image")));
    html.void(
        "img",
        Attrs::new()
            .set("src", ctx.asset(COURSE_IMAGE))
            .set("alt", title)
            .set("width", 560)
            .set("height", 400)
            .class("h-auto w-full rounded-3xl"),
    );
    html.close("div");
    revealed_text(
        html,
        "h2",
        Attrs::new().class("text-3xl font-bold text-[#061C3D] md:text-4xl"),
        motion.reveal("title"),
        title,
    );
    html.open(
        "p",
        Attrs::new()
            .class("flex items-baseline gap-2 text-lg")
            .motion(motion.tween("price")),
    );
    html.element("span", Attrs::new().class("text-[#BCBCBC]"), t.t("coursePrice"));
    html.element(
        "strong",
        Attrs::new().class("text-2xl text-primary"),
        t.t("price"),
    );
    html.close("p");
    html.close("div");

    html.open(
        "form",
        Attrs::new()
            .set("id", CheckoutForm::NAME)
            .set("method", "post")
            .flag("novalidate")
            .set("data-form", CheckoutForm::NAME)
            .set("data-success", t.t("successMessage"))
            .set("data-error", t.t("errorMessage"))
            .set_if(form.is_submitting(), "aria-busy", "true")
            .class("flex flex-col gap-5 rounded-3xl bg-white p-8 shadow-xl"),
    );
    revealed_text(
        html,
        "h3",
        Attrs::new().class("text-2xl font-bold text-[#061C3D]"),
        motion.reveal("form_title"),
        form_title,
    );
    fields::acknowledgment(html, ack, &root);

    let inputs = [
        ("name", "text", values.name.as_str()),
        ("phone", "tel", values.phone.as_str()),
        ("email", "email", values.email.as_str()),
    ];
    for (index, (name, kind, value)) in inputs.into_iter().enumerate() {
        fields::field(
            html,
            CheckoutForm::NAME,
            &Field {
                name,
                control: Control::Input(kind),
                label: t.t(&format!("form.{name}")),
                placeholder: t.t(&format!("form.{name}Placeholder")),
                value,
                required: true,
                error: form.error_for(name),
                motion: field_motion.get(index),
            },
            &root,
        );
    }

    html.open(
        "fieldset",
        Attrs::new()
            .class("flex flex-col gap-2")
            .motion(field_motion.get(inputs.len())),
    );
    html.element("legend", Attrs::new().class(FIELD_LABEL), t.t("form.paymentMethod"));
    html.open("div", Attrs::new().class("grid grid-cols-2 gap-4"));
    for method in vc_forms::PaymentMethod::ALL {
        let selected = method == values.payment_method;
        let attrs = Attrs::new()
            .set("type", "radio")
            .set("name", "paymentMethod")
            .set("value", method.as_str())
            .class("sr-only");
        html.open("label", Attrs::new().class(payment_option_classes(selected)));
        html.void("input", if selected { attrs.flag("checked") } else { attrs });
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(method.icon()))
                .set("alt", "")
                .set("width", 32)
                .set("height", 32),
        );
        html.element("span", Attrs::new().class("text-sm"), root.t(method.label_key()));
        html.close("label");
    }
    html.close("div");
    html.close("fieldset");

    let submit_label = if form.is_submitting() {
        t.t("form.submitting")
    } else {
        t.t("form.submit")
    };
    let submit = Attrs::new()
        .set("type", "submit")
        .class(button_classes(ButtonVariant::Primary, ButtonSize::Lg, "w-full"))
        .motion(motion.tween("submit"));
    html.element(
        "button",
        if form.is_submitting() {
            submit.flag("disabled")
        } else {
            submit
        },
        submit_label,
    );
    html.close("form");

    html.close("div");
    html.close("section");
}
