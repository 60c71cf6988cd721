use splitbill_application::BillSession;
use splitbill_domain::ParticipantName;
use splitbill_i18n as i18n;

use crate::summary_presenter::email_body;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailDraft {
    pub participant: ParticipantName,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn mailto_link(&self) -> String {
        mailto_link(&self.recipient, &self.subject, &self.body)
    }
}

pub fn email_subject(restaurant_name: &str) -> String {
    let name = restaurant_name.trim();
    i18n::email_subject((!name.is_empty()).then_some(name))
}

pub fn mailto_link(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// One draft per included participant that has a contact, in roster order.
pub fn email_drafts(session: &BillSession) -> Vec<EmailDraft> {
    let totals = session.all_totals();
    let subject = email_subject(&session.restaurant().name);

    totals
        .keys()
        .filter_map(|name| {
            let recipient = session.roster().contact(name.as_str())?;
            Some(EmailDraft {
                participant: name.clone(),
                recipient: recipient.to_string(),
                subject: subject.clone(),
                body: email_body(session, name.as_str(), &totals),
            })
        })
        .collect()
}
