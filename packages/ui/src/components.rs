//! Small shared form controls used by every screen.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
        }
    }
}

/// Styled button. With `r#type: "submit"` the surrounding form's `onsubmit`
/// fires; otherwise wire `onclick`.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let kind = r#type;
    rsx! {
        button {
            class: "{variant.class()}",
            r#type: "{kind}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Styled text input with a controlled value.
#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let kind = r#type;
    rsx! {
        input {
            class: "input",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Inline error banner shown above or inside a form.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}
