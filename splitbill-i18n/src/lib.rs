#[cfg(all(feature = "id", feature = "en"))]
compile_error!("Cannot enable both 'id' and 'en' features at the same time");

#[cfg(feature = "id")]
pub mod strings {
    use std::fmt::Display;

    pub const SUMMARY_TITLE: &str = "Ringkasan Patungan";
    pub const INITIATOR: &str = "Pengumpul";
    pub const PAYMENT_ACCOUNTS: &str = "Rekening Pembayaran:";
    pub const DETAILS_PER_PERSON: &str = "Rincian per orang:";
    pub const ACCOUNTS_FALLBACK: &str =
        "Silakan bayar ke pengumpul (detail rekening akan diberikan).";
    pub const ACCOUNTS_HEADER: &str = "Silakan bayar ke salah satu rekening berikut:";
    pub const EMAIL_INTRO: &str = "Berikut ringkasan patungan kamu:";
    pub const SUBTOTAL: &str = "Subtotal";
    pub const TAX_SHARE: &str = "Pajak (bagianmu)";
    pub const TOTAL_TO_PAY: &str = "Total yang harus dibayar";
    pub const THANK_YOU: &str = "Terima kasih!";
    pub const PHONE_PREFIX: &str = "Telp";
    pub const NO_ASSIGNMENTS: &str = "Belum ada pembagian. Bagikan item untuk melihat total.";

    pub const ITEM: &str = "Item";
    pub const QTY: &str = "Jml";
    pub const TOTAL: &str = "Total";
    pub const UNIT: &str = "Satuan";
    pub const REMAINING: &str = "Sisa";
    pub const PERSON: &str = "Orang";
    pub const EMAIL: &str = "Email";
    pub const TAX: &str = "Pajak";

    pub const ITEM_NAME_REQUIRED: &str = "Nama item wajib diisi.";
    pub const FIELD_QUANTITY: &str = "Jumlah";
    pub const FIELD_TOTAL_PRICE: &str = "Total harga";
    pub const FIELD_SHARE: &str = "Jumlah bagian";
    pub const FIELD_TAX_TOTAL: &str = "Pajak";

    pub fn greeting(name: impl Display) -> String {
        format!("Hai {name},")
    }

    pub fn email_subject(restaurant: Option<&str>) -> String {
        match restaurant {
            Some(name) => format!("{SUMMARY_TITLE}: {name}"),
            None => SUMMARY_TITLE.to_string(),
        }
    }

    pub fn must_be_number(field: &str) -> String {
        format!("{field} harus berupa angka.")
    }

    pub fn must_be_finite(field: &str) -> String {
        format!("{field} harus berupa angka yang valid.")
    }

    pub fn must_not_be_negative(field: &str) -> String {
        format!("{field} harus >= 0.")
    }

    pub fn must_not_exceed(field: &str, max: impl Display) -> String {
        format!("{field} harus <= {max}.")
    }

    pub fn unit_price_out_of_range(item: impl Display) -> String {
        format!("Jumlah '{item}' terlalu kecil untuk harganya.")
    }

    pub const QTY_MUST_BE_POSITIVE: &str = "Jumlah harus > 0.";

    pub fn quantity_below_assigned(item: impl Display, assigned: impl Display) -> String {
        format!("Jumlah '{item}' tidak boleh kurang dari yang sudah dibagi ({assigned}).")
    }

    pub fn item_not_found(name: impl Display) -> String {
        format!("Item '{name}' tidak ditemukan.")
    }

    pub fn participant_not_found(name: impl Display) -> String {
        format!("Orang '{name}' tidak ditemukan.")
    }

    pub fn not_enough_left(item: impl Display, available: impl Display) -> String {
        format!("'{item}' tidak cukup. Tersedia: {available}")
    }
}

#[cfg(not(feature = "id"))]
pub mod strings {
    use std::fmt::Display;

    pub const SUMMARY_TITLE: &str = "Split Bill Summary";
    pub const INITIATOR: &str = "Initiator";
    pub const PAYMENT_ACCOUNTS: &str = "Payment Accounts:";
    pub const DETAILS_PER_PERSON: &str = "Details per person:";
    pub const ACCOUNTS_FALLBACK: &str =
        "Please pay to the initiator (account details to be provided).";
    pub const ACCOUNTS_HEADER: &str = "Please pay to one of these accounts:";
    pub const EMAIL_INTRO: &str = "Here is your split bill summary:";
    pub const SUBTOTAL: &str = "Subtotal";
    pub const TAX_SHARE: &str = "Tax (your share)";
    pub const TOTAL_TO_PAY: &str = "Total you should pay";
    pub const THANK_YOU: &str = "Thank you!";
    pub const PHONE_PREFIX: &str = "Ph";
    pub const NO_ASSIGNMENTS: &str = "No assignments yet. Assign items to see totals.";

    pub const ITEM: &str = "Item";
    pub const QTY: &str = "Qty";
    pub const TOTAL: &str = "Total";
    pub const UNIT: &str = "Unit";
    pub const REMAINING: &str = "Remaining";
    pub const PERSON: &str = "Person";
    pub const EMAIL: &str = "Email";
    pub const TAX: &str = "Tax";

    pub const ITEM_NAME_REQUIRED: &str = "Item name is required.";
    pub const FIELD_QUANTITY: &str = "Qty";
    pub const FIELD_TOTAL_PRICE: &str = "Total Price";
    pub const FIELD_SHARE: &str = "Qty";
    pub const FIELD_TAX_TOTAL: &str = "Tax";

    pub fn greeting(name: impl Display) -> String {
        format!("Hi {name},")
    }

    pub fn email_subject(restaurant: Option<&str>) -> String {
        match restaurant {
            Some(name) => format!("{SUMMARY_TITLE}: {name}"),
            None => SUMMARY_TITLE.to_string(),
        }
    }

    pub fn must_be_number(field: &str) -> String {
        format!("{field} must be a number.")
    }

    pub fn must_be_finite(field: &str) -> String {
        format!("{field} must be a finite number.")
    }

    pub fn must_not_be_negative(field: &str) -> String {
        format!("{field} must be >= 0.")
    }

    pub fn must_not_exceed(field: &str, max: impl Display) -> String {
        format!("{field} must be <= {max}.")
    }

    pub fn unit_price_out_of_range(item: impl Display) -> String {
        format!("Qty of '{item}' is too small for its price.")
    }

    pub const QTY_MUST_BE_POSITIVE: &str = "Qty must be > 0.";

    pub fn quantity_below_assigned(item: impl Display, assigned: impl Display) -> String {
        format!("Qty of '{item}' cannot be less than what is already assigned ({assigned}).")
    }

    pub fn item_not_found(name: impl Display) -> String {
        format!("Item '{name}' not found.")
    }

    pub fn participant_not_found(name: impl Display) -> String {
        format!("Person '{name}' not found.")
    }

    pub fn not_enough_left(item: impl Display, available: impl Display) -> String {
        format!("Not enough '{item}' left. Available: {available}")
    }
}

pub use strings::*;
