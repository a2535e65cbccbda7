use leptos::{either::Either, ev::Event, prelude::*, web_sys::Element};

use super::reveal::AnimatedSection;
use crate::{
    contact::{ContactField, ContactForm},
    sections::Section,
};

/// Contact form posting straight to the hosted form service.
///
/// The browser's `required` check is the only validation; the response is
/// handled entirely by the endpoint.
#[component]
pub fn Contact(endpoint: &'static str) -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());

    // input events bubble up from every field; the target's name picks the field
    let on_input = move |ev: Event| {
        let Some(name) = event_target::<Element>(&ev).get_attribute("name") else {
            return;
        };
        let value = event_target_value(&ev);
        match form.with_untracked(|f| f.apply_input(&name, value)) {
            Ok(next) => set_form.set(next),
            Err(e) => log::debug!("{e}"),
        }
    };

    view! {
        <section id=Section::Contact.id()>
            <AnimatedSection>
                <h2>{Section::Contact.title()}</h2>
                <p class="contact-intro">
                    "Have a question or want to work together? Leave your details below, and I'll get back to you as soon as possible."
                </p>
                <form class="contact-form" action=endpoint method="POST" on:input=on_input>
                    {ContactField::ALL
                        .into_iter()
                        .map(|field| view! { <ContactInput field=field form=form /> })
                        .collect_view()}
                    <button type="submit" class="btn submit-btn">
                        "Send Message"
                    </button>
                </form>
            </AnimatedSection>
        </section>
    }
}

#[component]
fn ContactInput(field: ContactField, form: ReadSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());

    let control = match field.input_type() {
        Some(kind) => Either::Left(view! {
            <input type=kind id=field.name() name=field.name() required=true prop:value=value />
        }),
        None => Either::Right(view! {
            <textarea
                id=field.name()
                name=field.name()
                rows="5"
                required=true
                prop:value=value
            ></textarea>
        }),
    };

    view! {
        <div class="form-group">
            <label for=field.name()>{field.label()}</label>
            {control}
        </div>
    }
}
