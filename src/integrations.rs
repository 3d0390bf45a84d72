//! Boundaries to systems the PMS core does not own: billing, OTA channel
//! managers and guest notes. `Unconfigured` stands in until a real
//! integration is wired up and answers every call with `NotImplemented`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::PmsError;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FolioCharge {
    #[serde(default)]
    pub reservation_id: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChargeReceipt {
    pub reservation_id: String,
    pub transaction_id: String,
    pub amount: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct RoomNote {
    #[serde(default)]
    pub room: String,
    #[validate(length(min = 1))]
    pub text: String,
}

pub trait Billing: Send + Sync {
    fn post_charge(&self, charge: &FolioCharge) -> Result<ChargeReceipt, PmsError>;
}

pub trait ChannelManager: Send + Sync {
    fn connect(&self, channel: &str) -> Result<(), PmsError>;
}

pub trait GuestNotes: Send + Sync {
    fn attach_note(&self, note: &RoomNote) -> Result<(), PmsError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Unconfigured;

impl Billing for Unconfigured {
    fn post_charge(&self, charge: &FolioCharge) -> Result<ChargeReceipt, PmsError> {
        log::warn!(
            "billing not configured, dropping charge of {:.2} for {}",
            charge.amount,
            charge.reservation_id
        );
        Err(PmsError::NotImplemented("billing".to_string()))
    }
}

impl ChannelManager for Unconfigured {
    fn connect(&self, channel: &str) -> Result<(), PmsError> {
        log::warn!("channel manager not configured, cannot connect {}", channel);
        Err(PmsError::NotImplemented(format!("channel {}", channel)))
    }
}

impl GuestNotes for Unconfigured {
    fn attach_note(&self, note: &RoomNote) -> Result<(), PmsError> {
        log::warn!("notes not configured, dropping note for room {}", note.room);
        Err(PmsError::NotImplemented("room notes".to_string()))
    }
}

/// The collaborators handed to the HTTP layer.
pub struct Integrations {
    pub billing: Box<dyn Billing>,
    pub channels: Box<dyn ChannelManager>,
    pub notes: Box<dyn GuestNotes>,
}

impl Default for Integrations {
    fn default() -> Self {
        Self {
            billing: Box::new(Unconfigured),
            channels: Box::new(Unconfigured),
            notes: Box::new(Unconfigured),
        }
    }
}
