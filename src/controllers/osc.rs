// src/controllers/osc.rs
// OSC Controller
//
// Addresses, with the effect given by its snake_case kind name:
//   /effect/show     <effect> <bool|int>
//   /effect/toggle   <effect>
//   /effect/seed     <effect> <int>
//   /effect/param    <effect> <key> <bool|int|float>
//   /effect/snapshot <effect> <json>

use nannou_osc as osc;
use std::error::Error;
use thiserror::Error;

use crate::effects::{EffectCommand, EffectKind, EffectSnapshot, ParamValue};
use crate::error::EffectError;

#[derive(Error, Debug)]
pub enum OscError {
    #[error("unknown OSC address pattern: {0}")]
    UnknownAddress(String),

    #[error("unexpected arguments for {0}")]
    BadArguments(String),

    #[error(transparent)]
    Effect(#[from] EffectError),
}

pub struct OscController {
    command_queue: Vec<EffectCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message) {
                    Ok(command) => self.command_queue.push(command),
                    Err(e) => log::warn!("{}", e),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<EffectCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

fn kind(name: &str) -> Result<EffectKind, OscError> {
    Ok(name.parse::<EffectKind>()?)
}

fn flag(arg: &osc::Type) -> Option<bool> {
    match arg {
        osc::Type::Bool(value) => Some(*value),
        osc::Type::Int(value) => Some(*value != 0),
        _ => None,
    }
}

fn param_value(arg: &osc::Type) -> Option<ParamValue> {
    match arg {
        osc::Type::Bool(value) => Some(ParamValue::Bool(*value)),
        osc::Type::Int(value) => Some(ParamValue::Int(*value as i64)),
        osc::Type::Long(value) => Some(ParamValue::Int(*value)),
        osc::Type::Float(value) => Some(ParamValue::Float(*value as f64)),
        osc::Type::Double(value) => Some(ParamValue::Float(*value)),
        _ => None,
    }
}

/// Turn one OSC message into an effect edit.
pub fn parse_message(message: &osc::Message) -> Result<EffectCommand, OscError> {
    let bad = || OscError::BadArguments(message.addr.clone());
    match message.addr.as_str() {
        "/effect/show" => {
            if let [osc::Type::String(name), setting] = &message.args[..] {
                let show = flag(setting).ok_or_else(bad)?;
                Ok(EffectCommand::Show {
                    kind: kind(name)?,
                    show,
                })
            } else {
                Err(bad())
            }
        }
        "/effect/toggle" => {
            if let [osc::Type::String(name)] = &message.args[..] {
                Ok(EffectCommand::Toggle(kind(name)?))
            } else {
                Err(bad())
            }
        }
        "/effect/seed" => {
            if let [osc::Type::String(name), osc::Type::Int(seed)] = &message.args[..] {
                Ok(EffectCommand::Seed {
                    kind: kind(name)?,
                    seed: *seed,
                })
            } else {
                Err(bad())
            }
        }
        "/effect/param" => {
            if let [osc::Type::String(name), osc::Type::String(key), value] = &message.args[..] {
                let value = param_value(value).ok_or_else(bad)?;
                Ok(EffectCommand::Param {
                    kind: kind(name)?,
                    key: key.clone(),
                    value,
                })
            } else {
                Err(bad())
            }
        }
        "/effect/snapshot" => {
            if let [osc::Type::String(name), osc::Type::String(json)] = &message.args[..] {
                let snapshot = EffectSnapshot::from_json(kind(name)?, json)?;
                Ok(EffectCommand::Replace(snapshot))
            } else {
                Err(bad())
            }
        }
        _ => Err(OscError::UnknownAddress(message.addr.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(addr: &str, args: Vec<osc::Type>) -> osc::Message {
        osc::Message {
            addr: addr.to_string(),
            args,
        }
    }

    fn name(kind: &str) -> osc::Type {
        osc::Type::String(kind.to_string())
    }

    #[test]
    fn test_show_accepts_bool_and_int() {
        let on = parse_message(&message("/effect/show", vec![name("coffee"), osc::Type::Bool(true)])).unwrap();
        let off = parse_message(&message("/effect/show", vec![name("coffee"), osc::Type::Int(0)])).unwrap();
        assert_eq!(
            on,
            EffectCommand::Show {
                kind: EffectKind::Coffee,
                show: true
            }
        );
        assert_eq!(
            off,
            EffectCommand::Show {
                kind: EffectKind::Coffee,
                show: false
            }
        );
    }

    #[test]
    fn test_param_carries_typed_value() {
        let command = parse_message(&message(
            "/effect/param",
            vec![name("arc_lines"), name("center_range"), osc::Type::Float(0.0)],
        ))
        .unwrap();
        assert_eq!(
            command,
            EffectCommand::Param {
                kind: EffectKind::ArcLines,
                key: "center_range".to_string(),
                value: ParamValue::Float(0.0),
            }
        );
    }

    #[test]
    fn test_snapshot_is_parsed_for_its_kind() {
        let json = EffectKind::Towers.default_snapshot().to_json().unwrap();
        let command = parse_message(&message("/effect/snapshot", vec![name("towers"), osc::Type::String(json)])).unwrap();
        assert_eq!(command, EffectCommand::Replace(EffectKind::Towers.default_snapshot()));
    }

    #[test]
    fn test_rejects_malformed_messages() {
        assert!(matches!(
            parse_message(&message("/grid/create", vec![])),
            Err(OscError::UnknownAddress(_))
        ));
        assert!(matches!(
            parse_message(&message("/effect/toggle", vec![name("spiral")])),
            Err(OscError::Effect(EffectError::UnknownEffect(_)))
        ));
        assert!(matches!(
            parse_message(&message("/effect/seed", vec![name("towers"), osc::Type::Float(1.0)])),
            Err(OscError::BadArguments(_))
        ));
    }
}
