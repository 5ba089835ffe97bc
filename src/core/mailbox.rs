use crate::domain::mail::Mail;
use crate::domain::ports::Frankable;
use std::fmt;

/// Append-only list of mails, kept in the order they were posted.
#[derive(Debug, Default, Clone)]
pub struct Mailbox {
    mails: Vec<Mail>,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mail(&mut self, mail: Mail) {
        tracing::debug!("Posting {}", mail);
        self.mails.push(mail);
    }

    /// Total franking amount of the valid mails. Invalid mails are ignored.
    pub fn frank(&self) -> f64 {
        self.mails
            .iter()
            .filter(|mail| {
                let valid = mail.is_valid();
                if !valid {
                    tracing::debug!("Skipping invalid mail: {}", mail);
                }
                valid
            })
            .map(|mail| mail.frank())
            .sum()
    }

    pub fn invalid_mails(&self) -> usize {
        self.mails.iter().filter(|mail| !mail.is_valid()).count()
    }

    pub fn display(&self) -> Vec<String> {
        self.mails.iter().map(|mail| mail.to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mail> {
        self.mails.iter()
    }

    pub fn len(&self) -> usize {
        self.mails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mails.is_empty()
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Boîte aux lettres: [{}]", self.display().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mail::{DeliveryMode, Format};

    #[test]
    fn test_empty_mailbox() {
        let mailbox = Mailbox::new();
        assert!(mailbox.is_empty());
        assert_eq!(mailbox.frank(), 0.0);
        assert_eq!(mailbox.invalid_mails(), 0);
        assert!(mailbox.display().is_empty());
        assert_eq!(mailbox.to_string(), "Boîte aux lettres: []");
    }

    #[test]
    fn test_mailbox_to_string() {
        let mut mailbox = Mailbox::new();
        mailbox.add_mail(Mail::letter(180, DeliveryMode::Normal, "dest", Format::A5));
        mailbox.add_mail(Mail::advertisement(240, DeliveryMode::Express, ""));

        assert_eq!(mailbox.len(), 2);
        assert_eq!(
            mailbox.to_string(),
            "Boîte aux lettres: [Lettre : 180 g, normal, pour 'dest', A5, \
             Publicité : 240 g, express, pour '' (invalide)]"
        );
    }
}
