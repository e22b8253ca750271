//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod account;
mod envelope;
mod error;
mod events;
mod object;
mod position;
mod scalar;

pub use account::{decode_balance, decode_operator_info};
pub use envelope::{Envelope, SuccessEnvelope, decode_envelope};
pub use error::DecodeError;
pub use events::{
    decode_events, decode_subscribed_events, encode_delete_subscription_form,
    encode_events_form, encode_subscribe_event_form,
};
pub use object::{
    decode_object_info, decode_object_list, encode_add_object_form, encode_edit_object_form,
    encode_object_form,
};
pub use position::{
    decode_object_positions, decode_position, decode_position_request, decode_positions,
    encode_positions_form, encode_requested_position_form,
};
