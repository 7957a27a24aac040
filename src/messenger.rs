//! Cross-Domain Messenger Interface
//!
//! The messenger is the one-way, asynchronous message channel between the L1 and
//! L2 execution contexts. Outbound, the gateway hands it an opaque payload
//! addressed to the peer gateway and never waits for delivery. Inbound, the
//! messenger invokes the gateway's finalize-withdrawal entry point and presents
//! the attested author of the in-flight message as part of the call context,
//! rather than as an ambient side-channel query.
//!
//! Delivery and at-most-once processing of relayed messages are the transport's
//! guarantees, not re-verified by the gateway.

use crate::address::Address;

/// An outbound cross-domain message, produced once per successful deposit.
///
/// The gateway does not track delivery; once submitted, the message is the
/// transport's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// The contract on the remote ledger that should receive the payload.
    pub target: Address,
    /// Encoded instruction for the target (see [`crate::message::GatewayMessage`]).
    pub payload: Vec<u8>,
}

/// Call context the messenger presents when relaying an inbound message.
///
/// `caller` is the address invoking the gateway's entry point; `originator` is
/// the messenger-attested author of the message being relayed. The gateway's
/// authorization gate checks both, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayContext {
    /// Address invoking the entry point. Must equal the configured messenger.
    pub caller: Address,
    /// Attested author of the in-flight cross-domain message. Must equal the
    /// configured peer gateway.
    pub originator: Address,
}

/// Outbound half of the cross-domain transport, as consumed by the gateway.
///
/// Submission is fire-and-forget and must not fail: accepting a message for
/// relay is a queueing operation on the transport side. Delivery happens
/// asynchronously at some later point, unordered relative to the submitting
/// call.
pub trait MessengerClient {
    /// Submits `message` for relay to the remote ledger.
    fn send_message(&self, message: OutboundMessage);
}
