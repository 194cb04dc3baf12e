use reqwest::Url;

fn digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Digits of a phone number. Bare ten-digit mobiles get the India country
/// code; numbers written with a leading `+` are already international.
fn international_digits(phone: &str) -> String {
    let trimmed = phone.trim();
    let number = digits(trimmed);
    if !trimmed.starts_with('+') && number.len() == 10 {
        format!("91{number}")
    } else {
        number
    }
}

pub fn call_link(phone: &str) -> String {
    let trimmed = phone.trim();
    if trimmed.starts_with('+') {
        format!("tel:+{}", digits(trimmed))
    } else {
        format!("tel:{}", digits(trimmed))
    }
}

pub fn whatsapp_link(phone: &str, text: Option<&str>) -> String {
    let base = format!("https://wa.me/{}", international_digits(phone));
    match (text, Url::parse(&base)) {
        (Some(text), Ok(mut url)) => {
            url.query_pairs_mut().append_pair("text", text);
            url.to_string()
        }
        _ => base,
    }
}

/// Link the customer can use to follow up on a submitted booking.
pub fn booking_follow_up(business_phone: &str, booking_id: &str) -> String {
    whatsapp_link(business_phone, Some(&format!("Booking Request: {booking_id}")))
}
