use crate::{
    number_format::format_number,
    svg_table::{Alignment, SvgTableBuilder, combine_svgs_vertically},
};
use indexmap::IndexMap;
use splitbill_application::BillSession;
use splitbill_domain::{ParticipantName, ParticipantTotal};
use splitbill_i18n as i18n;
use std::borrow::Cow;

pub struct SettlementPresenter;

pub struct SettlementView {
    pub items_table_svg: String,
    /// `None` while nobody holds a share.
    pub totals_table_svg: Option<String>,
}

impl SettlementView {
    /// Both tables stacked into one document.
    pub fn combined_svg(&self) -> Option<String> {
        let mut svgs = vec![self.items_table_svg.as_str()];
        if let Some(totals) = &self.totals_table_svg {
            svgs.push(totals.as_str());
        }
        combine_svgs_vertically(&svgs)
    }
}

impl SettlementPresenter {
    pub fn render(session: &BillSession) -> SettlementView {
        let totals = session.all_totals();
        let items_table_svg = Self::build_items_table_svg(session);

        if totals.is_empty() {
            return SettlementView {
                items_table_svg,
                totals_table_svg: None,
            };
        }

        SettlementView {
            items_table_svg,
            totals_table_svg: Some(Self::build_totals_table_svg(session, &totals)),
        }
    }

    pub fn build_items_table_svg(session: &BillSession) -> String {
        let context = session.context();
        let mut builder = SvgTableBuilder::new()
            .column(i18n::ITEM, Alignment::Left)
            .column(i18n::QTY, Alignment::Right)
            .column(i18n::TOTAL, Alignment::Right)
            .column(i18n::UNIT, Alignment::Right)
            .column(i18n::REMAINING, Alignment::Right);

        for (name, item) in session.catalog().iter() {
            builder = builder.row([
                Cow::Owned(name.to_string()),
                Cow::Owned(format_number(item.quantity)),
                Cow::Owned(format_number(item.total_price)),
                Cow::Owned(format_number(context.round(item.unit_price()))),
                Cow::Owned(format_number(session.remaining_quantity(name.as_str()))),
            ]);
        }

        builder.build()
    }

    pub fn build_totals_table_svg(
        session: &BillSession,
        totals: &IndexMap<ParticipantName, ParticipantTotal>,
    ) -> String {
        let mut builder = SvgTableBuilder::new()
            .column(i18n::PERSON, Alignment::Left)
            .column(i18n::EMAIL, Alignment::Left)
            .column(i18n::SUBTOTAL, Alignment::Right)
            .column(i18n::TAX, Alignment::Right)
            .column(i18n::TOTAL, Alignment::Right);

        for (name, total) in totals {
            let contact = session.roster().contact(name.as_str()).unwrap_or_default();
            builder = builder.row([
                Cow::Owned(name.to_string()),
                Cow::Owned(contact.to_string()),
                Cow::Owned(format_number(total.subtotal)),
                Cow::Owned(format_number(total.tax_share)),
                Cow::Owned(format_number(total.total)),
            ]);
        }

        builder.build()
    }
}
