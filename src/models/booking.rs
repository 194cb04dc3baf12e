use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub full_name: String,
    pub mobile: String,
    pub event_type: String,
    pub services: Vec<String>,
    pub date: String,
    pub location: String,
    pub guests: u32,
    pub notes: String,
    pub status: BookingStatus,
    /// Creation instant, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// A booking as submitted by a customer, before id, timestamp and status are assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub full_name: String,
    pub mobile: String,
    pub event_type: String,
    pub services: Vec<String>,
    pub date: String,
    pub location: String,
    pub guests: u32,
    pub notes: String,
}

impl BookingDraft {
    pub fn into_booking(self, id: String, timestamp: i64) -> Booking {
        Booking {
            id,
            full_name: self.full_name,
            mobile: self.mobile,
            event_type: self.event_type,
            services: self.services,
            date: self.date,
            location: self.location,
            guests: self.guests,
            notes: self.notes,
            status: BookingStatus::Pending,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            _ => None,
        }
    }
}
