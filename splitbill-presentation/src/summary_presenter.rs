use indexmap::IndexMap;
use rust_decimal::Decimal;
use splitbill_application::{BillSession, Initiator, PaymentAccount, RestaurantInfo};
use splitbill_domain::{BreakdownLine, ParticipantName, ParticipantTotal};
use splitbill_i18n as i18n;

use crate::number_format::format_number;

pub fn accounts_text(accounts: &[PaymentAccount]) -> String {
    if accounts.is_empty() {
        return i18n::ACCOUNTS_FALLBACK.to_string();
    }

    let mut lines = Vec::with_capacity(accounts.len() + 1);
    lines.push(i18n::ACCOUNTS_HEADER.to_string());
    lines.extend(accounts.iter().map(account_line));
    lines.join("\n")
}

/// Name, address and phone of the restaurant, skipping blank fields.
pub fn restaurant_header(restaurant: &RestaurantInfo) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if !restaurant.name.is_empty() {
        lines.push(restaurant.name.clone());
    }
    if !restaurant.address.is_empty() {
        lines.push(restaurant.address.clone());
    }
    if !restaurant.phone.is_empty() {
        lines.push(format!("{}: {}", i18n::PHONE_PREFIX, restaurant.phone));
    }
    lines
}

/// `item: qty x unit = subtotal`
pub fn breakdown_line(line: &BreakdownLine) -> String {
    format!(
        "{}: {} x {} = {}",
        line.item,
        format_number(line.quantity),
        format_number(line.unit_price),
        format_number(line.subtotal)
    )
}

/// Plain-text email for one participant.
///
/// `totals` must come from [`BillSession::all_totals`]; a participant missing
/// from it is shown with a zero subtotal and tax share.
pub fn email_body(
    session: &BillSession,
    participant: &str,
    totals: &IndexMap<ParticipantName, ParticipantTotal>,
) -> String {
    let total = totals.get(participant).copied().unwrap_or(ParticipantTotal {
        subtotal: Decimal::ZERO,
        tax_share: Decimal::ZERO,
        total: Decimal::ZERO,
    });

    let mut lines = restaurant_header(session.restaurant());
    lines.push(i18n::greeting(participant));
    lines.push(String::new());
    lines.push(i18n::EMAIL_INTRO.to_string());
    lines.push(String::new());
    lines.extend(
        session
            .breakdown(participant)
            .iter()
            .map(|line| format!("- {}", breakdown_line(line))),
    );
    lines.push(String::new());
    lines.push(format!("{}: {}", i18n::SUBTOTAL, format_number(total.subtotal)));
    lines.push(format!("{}: {}", i18n::TAX_SHARE, format_number(total.tax_share)));
    lines.push(format!("{}: {}", i18n::TOTAL_TO_PAY, format_number(total.total)));
    lines.push(String::new());
    lines.push(accounts_text(&session.initiator().accounts));
    lines.push(String::new());
    lines.push(i18n::THANK_YOU.to_string());
    lines.join("\n")
}

/// Lines of the shareable summary image. The first line is the title.
pub fn summary_lines(
    session: &BillSession,
    totals: &IndexMap<ParticipantName, ParticipantTotal>,
) -> Vec<String> {
    let mut lines = vec![i18n::SUMMARY_TITLE.to_string()];
    lines.extend(restaurant_header(session.restaurant()));

    let initiator = session.initiator();
    if let Some(line) = initiator_line(initiator) {
        lines.push(line);
    }
    if !initiator.accounts.is_empty() {
        lines.push(String::new());
        lines.push(i18n::PAYMENT_ACCOUNTS.to_string());
        lines.extend(initiator.accounts.iter().map(account_line));
    }

    lines.push(String::new());
    lines.push(String::new());
    lines.push(i18n::DETAILS_PER_PERSON.to_string());
    for (name, total) in totals {
        let header = match session.roster().contact(name.as_str()) {
            Some(contact) => format!("{name} ({contact})"),
            None => name.to_string(),
        };
        lines.push(format!("- {header}: {}", format_number(total.total)));
        lines.extend(
            session
                .breakdown(name.as_str())
                .iter()
                .map(|line| format!("    * {}", breakdown_line(line))),
        );
    }
    lines
}

fn initiator_line(initiator: &Initiator) -> Option<String> {
    let Initiator { name, email, .. } = initiator;
    match (name.is_empty(), email.is_empty()) {
        (true, true) => None,
        (false, true) => Some(format!("{}: {name}", i18n::INITIATOR)),
        (true, false) => Some(format!("{}: ({email})", i18n::INITIATOR)),
        (false, false) => Some(format!("{}: {name} ({email})", i18n::INITIATOR)),
    }
}

fn account_line(account: &PaymentAccount) -> String {
    format!("- {}: {}", account.label, account.detail)
}
