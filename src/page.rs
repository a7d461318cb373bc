use crate::configuration::{FormSettings, Settings};
use crate::controller::ContactForm;
use crate::form_client::FormClient;
use anyhow::Context;

/// Page-scoped owner of every contact form on a loaded page.
///
/// Built once the page is ready and torn down on navigation. Dropping the page
/// tears it down as well.
pub struct ContactPage {
    client: FormClient,
    form_settings: FormSettings,
    forms: Vec<ContactForm>,
}

impl ContactPage {
    #[tracing::instrument(name = "Prepare the contact page", skip(settings))]
    pub fn ready(settings: &Settings) -> Result<Self, anyhow::Error> {
        let client = FormClient::new(&settings.form_backend)
            .context("Failed to set up the form backend client.")?;
        tracing::info!(endpoint = %client.endpoint(), "Contact page ready");
        Ok(Self {
            client,
            form_settings: settings.form.clone(),
            forms: Vec::new(),
        })
    }

    /// Bind a controller to another contact form instance on the page.
    pub fn attach_form(&mut self) -> ContactForm {
        let form = ContactForm::new(self.client.clone(), self.form_settings.clone());
        self.forms.push(form.clone());
        form
    }

    pub fn forms(&self) -> &[ContactForm] {
        &self.forms
    }

    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for ContactPage {
    fn drop(&mut self) {
        for form in &self.forms {
            form.teardown();
        }
        tracing::debug!(forms = self.forms.len(), "Contact page torn down");
    }
}
