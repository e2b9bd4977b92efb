use crate::core::form::{
    ContactForm, DeliveryError, Field, FormFields, RevertTimer, SubmissionState, SubmitOutcome,
};
use crate::core::i18n::Translator;
use crate::dom::Listener;
use crate::relay::{EmailJsRelay, MailRelay};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const FORM_ID: &str = "contact-form";

enum FieldControl {
    Input(web::HtmlInputElement),
    TextArea(web::HtmlTextAreaElement),
}

impl FieldControl {
    fn find(form: &web::HtmlFormElement, field: Field) -> Option<Self> {
        let el = form
            .query_selector(&format!("[name=\"{}\"]", field.id()))
            .ok()
            .flatten()?;
        match el.dyn_into::<web::HtmlInputElement>() {
            Ok(input) => Some(FieldControl::Input(input)),
            Err(el) => el
                .dyn_into::<web::HtmlTextAreaElement>()
                .ok()
                .map(FieldControl::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            FieldControl::Input(el) => el.value(),
            FieldControl::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            FieldControl::Input(el) => el.set_value(value),
            FieldControl::TextArea(el) => el.set_value(value),
        }
    }

    fn element(&self) -> &web::Element {
        match self {
            FieldControl::Input(el) => el,
            FieldControl::TextArea(el) => el,
        }
    }
}

/// DOM pieces the flow writes to. Error slots, banner and spinner are
/// optional; a page without them still validates and sends.
struct FormView {
    form: web::HtmlFormElement,
    controls: Vec<(Field, FieldControl)>,
    error_slots: Vec<(Field, web::Element)>,
    status: Option<web::Element>,
    submit: Option<web::HtmlButtonElement>,
}

impl FormView {
    fn bind(form: web::HtmlFormElement) -> anyhow::Result<Self> {
        let mut controls = Vec::with_capacity(Field::ALL.len());
        let mut error_slots = Vec::new();
        for field in Field::ALL {
            let control = FieldControl::find(&form, field)
                .ok_or_else(|| anyhow::anyhow!("#{} has no `{}` control", FORM_ID, field.id()))?;
            controls.push((field, control));
            if let Ok(Some(slot)) =
                form.query_selector(&format!("[data-error-for=\"{}\"]", field.id()))
            {
                error_slots.push((field, slot));
            }
        }
        let status = form.query_selector("[data-form-status]").ok().flatten();
        let submit = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
        Ok(Self {
            form,
            controls,
            error_slots,
            status,
            submit,
        })
    }

    fn read(&self) -> FormFields {
        let mut fields = FormFields::default();
        for (field, control) in &self.controls {
            fields.set(*field, control.value());
        }
        fields
    }

    fn render(&self, model: &ContactForm, tr: &Translator) {
        let errors = model.errors();
        for (field, slot) in &self.error_slots {
            match errors.get(*field) {
                Some(err) => {
                    let label = tr.t(field.label_key());
                    let text = tr.t_with(err.message_key(), &[("field", label.as_str())]);
                    slot.set_text_content(Some(&text));
                    _ = slot.remove_attribute("hidden");
                }
                None => {
                    slot.set_text_content(None);
                    _ = slot.set_attribute("hidden", "");
                }
            }
        }
        for (field, control) in &self.controls {
            let invalid = errors.get(*field).is_some();
            _ = control
                .element()
                .set_attribute("aria-invalid", &invalid.to_string());
        }

        let state = model.state();
        let sending = state == SubmissionState::Sending;
        if let Some(btn) = &self.submit {
            btn.set_disabled(!model.is_submit_enabled());
            let key = state.status_key().filter(|_| sending);
            btn.set_text_content(Some(&tr.t(key.unwrap_or("contact.form.submit"))));
            _ = btn.set_attribute("aria-busy", &sending.to_string());
        }

        if let Some(status) = &self.status {
            let banner = match state {
                SubmissionState::Success | SubmissionState::Error => state.status_key(),
                _ => None,
            };
            match banner {
                Some(key) => {
                    status.set_text_content(Some(&tr.t(key)));
                    let tag = match state {
                        SubmissionState::Success => "success",
                        _ => "error",
                    };
                    _ = status.set_attribute("data-state", tag);
                    _ = status.remove_attribute("hidden");
                }
                None => {
                    status.set_text_content(None);
                    _ = status.set_attribute("data-state", "idle");
                    _ = status.set_attribute("hidden", "");
                }
            }
        }
    }

    /// Mirror the model's field values back into the controls (after a
    /// successful send clears them).
    fn write_fields(&self, fields: &FormFields) {
        for (field, control) in &self.controls {
            if control.value() != fields.get(*field) {
                control.set_value(fields.get(*field));
            }
        }
    }
}

struct ContactShared {
    model: RefCell<ContactForm>,
    view: FormView,
    translator: Rc<Translator>,
    relay: EmailJsRelay,
    revert: RefCell<Option<Timeout>>,
}

impl ContactShared {
    fn render(&self) {
        self.view.render(&self.model.borrow(), &self.translator);
    }

    fn on_submit(self: &Rc<Self>) {
        let fields = self.view.read();
        let outcome = {
            let mut model = self.model.borrow_mut();
            for field in Field::ALL {
                model.set_field(field, fields.get(field));
            }
            model.submit()
        };
        match outcome {
            SubmitOutcome::Send(payload) => {
                // A banner from the previous send must not dismiss this one.
                self.revert.borrow_mut().take();
                self.render();
                log::info!("[contact] sending");
                let weak = Rc::downgrade(self);
                let relay = self.relay.clone();
                spawn_local(async move {
                    let result = relay.send(&payload).await;
                    match weak.upgrade() {
                        Some(shared) => shared.on_complete(result),
                        None => log::info!("[contact] send finished after unmount; ignored"),
                    }
                });
            }
            SubmitOutcome::Invalid => {
                log::info!("[contact] submission blocked by validation");
                self.render();
            }
            SubmitOutcome::Busy | SubmitOutcome::Unmounted => {}
        }
    }

    fn on_complete(self: &Rc<Self>, result: Result<(), DeliveryError>) {
        let timer = self.model.borrow_mut().complete(result);
        let Some(RevertTimer { ticket, delay_ms }) = timer else {
            return;
        };
        self.view.write_fields(self.model.borrow().fields());
        self.render();
        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(shared) = weak.upgrade() {
                if shared.model.borrow_mut().revert(ticket) {
                    shared.render();
                }
            }
        });
        *self.revert.borrow_mut() = Some(timeout);
    }

    fn on_input(&self, ev: &web::Event) {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let Some(field) = target.get_attribute("name").as_deref().and_then(Field::from_id) else {
            return;
        };
        let value = self
            .view
            .controls
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, c)| c.value())
            .unwrap_or_default();
        let had_error = self.model.borrow().errors().get(field).is_some();
        self.model.borrow_mut().set_field(field, value);
        if had_error {
            self.render();
        }
    }
}

/// Mounted contact form. Dropping it cancels the banner timer and detaches
/// the listeners; a send still in flight completes into nothing.
pub struct ContactHandle {
    shared: Rc<ContactShared>,
    _listeners: Vec<Listener>,
}

impl ContactHandle {
    /// Re-render translated text, e.g. after a locale switch.
    pub fn refresh(&self) {
        self.shared.render();
    }
}

impl Drop for ContactHandle {
    fn drop(&mut self) {
        self.shared.model.borrow_mut().unmount();
        self.shared.revert.borrow_mut().take();
        log::info!("[contact] unmounted");
    }
}

pub fn mount(
    document: &web::Document,
    translator: Rc<Translator>,
    relay: EmailJsRelay,
) -> anyhow::Result<Option<ContactHandle>> {
    let Some(el) = document.get_element_by_id(FORM_ID) else {
        return Ok(None);
    };
    let form = el
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not a <form>", FORM_ID))?;
    // Validation is ours; keep the browser's own bubbles out of the way.
    form.set_no_validate(true);
    let view = FormView::bind(form)?;

    let shared = Rc::new(ContactShared {
        model: RefCell::new(ContactForm::new()),
        view,
        translator,
        relay,
        revert: RefCell::new(None),
    });

    let weak = Rc::downgrade(&shared);
    let on_submit = Listener::new(&shared.view.form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if let Some(s) = weak.upgrade() {
            s.on_submit();
        }
    });
    let weak = Rc::downgrade(&shared);
    let on_input = Listener::new(&shared.view.form, "input", move |ev: web::Event| {
        if let Some(s) = weak.upgrade() {
            s.on_input(&ev);
        }
    });

    shared.render();
    log::info!("[contact] form mounted");
    Ok(Some(ContactHandle {
        shared,
        _listeners: vec![on_submit, on_input],
    }))
}
