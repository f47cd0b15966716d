//! Contact form field arguments shared by `validate` and `submit`.

use clap::Args;

use holmen_core::FieldId;
use holmen_form::MemorySurface;

/// Values for the contact form fields. Omitted fields are empty.
#[derive(Args, Debug, Clone, Default)]
pub struct ContactArgs {
    /// Visitor's name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Norwegian phone number, with or without +47.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Optional e-mail address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Project category (e.g. kitchen, bathroom).
    #[arg(long, default_value = "")]
    pub project_type: String,

    /// Free-text description of the job.
    #[arg(long, default_value = "")]
    pub message: String,

    /// Honeypot field. Anything here marks the submission as a bot.
    #[arg(long, default_value = "", hide = true)]
    pub website: String,
}

impl ContactArgs {
    pub fn value(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
            FieldId::ProjectType => &self.project_type,
            FieldId::Message => &self.message,
            FieldId::Website => &self.website,
        }
    }

    /// An in-memory form pre-filled with these values.
    pub fn surface(&self, submit_label: &str) -> MemorySurface {
        FieldId::ALL
            .iter()
            .fold(MemorySurface::new(submit_label), |surface, &id| {
                surface.with_field(id, self.value(id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holmen_form::FormSurface;

    #[test]
    fn surface_carries_every_field() {
        let args = ContactArgs {
            name: "Ola".into(),
            website: "x".into(),
            ..ContactArgs::default()
        };
        let surface = args.surface("Send");
        assert_eq!(surface.field(FieldId::Name), "Ola");
        assert_eq!(surface.field(FieldId::Website), "x");
        assert_eq!(surface.field(FieldId::Phone), "");
        assert_eq!(surface.submit_label(), "Send");
    }
}
