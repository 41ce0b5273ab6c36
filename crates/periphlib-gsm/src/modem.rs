//! `GsmModem` -- the AT command engine.
//!
//! This module ties the wire codec ([`crate::protocol`], [`crate::commands`])
//! to a [`Transport`] to produce a working modem driver. Every operation is
//! a half-duplex exchange with a rigid discipline:
//!
//! 1. write the command bytes (`Idle -> CommandSent`)
//! 2. wait a fixed settle interval (`CommandSent -> AwaitingSettle`),
//!    because the modem offers no end-of-reply marker to wait on
//! 3. drain whatever the modem has buffered, exactly once
//!    (`AwaitingSettle -> Responded`)
//! 4. decode and hand the reply to the caller (`Responded -> Idle`)
//!
//! No retries, no partial-read accumulation across drains. A reply that
//! arrives after the drain is lost to this exchange and will pollute the
//! next one -- inherent to the settle-interval heuristic, which is why the
//! wait is pluggable via [`Delay`].
//!
//! Call control (`make_call` / `end_ongoing_call`) layers a single piece of
//! state on top: the engine-local `ongoing_call` flag. It is not global and
//! not shared; two engines on two ports track two independent calls.

use std::time::Duration;

use tracing::{debug, trace};

use periphlib_core::delay::{Delay, TokioDelay};
use periphlib_core::error::Result;
use periphlib_core::transport::Transport;

use crate::commands::{self, SignalReport};
use crate::protocol::{self, AtReply, ClassifiedReply, ReplyShape, CTRL_Z};

/// Default settle interval between a command write and the reply drain.
pub const DEFAULT_SETTLE: Duration = Duration::from_secs(1);

/// Settle interval for the SMS setup steps (`AT+CMGF=1`, `AT+CMGS`).
pub const SMS_SETUP_SETTLE: Duration = Duration::from_secs(3);

/// Settle interval after the SMS body is written; message submission to the
/// network is the slowest exchange in the command set.
pub const SMS_SEND_SETTLE: Duration = Duration::from_secs(10);

/// Default ring duration for [`GsmModem::make_missed_call`].
pub const DEFAULT_MISSED_CALL_RING: Duration = Duration::from_secs(3);

/// Size of the reply drain buffer. SMS listings are the largest replies.
const DRAIN_CAPACITY: usize = 4096;

/// The engine's position in the exchange cycle.
///
/// Outside of an in-flight operation the engine is always `Idle`; the
/// other phases are observable mid-exchange (e.g. from a `Delay`
/// implementation) and in trace logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// No exchange in flight.
    Idle,
    /// Command bytes written, settle wait not yet started.
    CommandSent,
    /// Inside the settle wait.
    AwaitingSettle,
    /// Reply drained, not yet consumed by the caller.
    Responded,
}

/// Outcome status of a call-control operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    /// Dialed, rang, and hung up as planned.
    Missed,
    /// An ongoing call was ended.
    Cancelled,
    /// `end_ongoing_call` with no call in progress; nothing was sent.
    NoOngoingCall,
    /// The dial command was not accepted.
    UnableToMakeCall,
    /// The modem rejected a step of the operation.
    Error,
}

impl std::fmt::Display for CallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallStatus::Missed => write!(f, "Call Missed"),
            CallStatus::Cancelled => write!(f, "Call Cancelled"),
            CallStatus::NoOngoingCall => write!(f, "No Ongoing Call"),
            CallStatus::UnableToMakeCall => write!(f, "Unable to make call"),
            CallStatus::Error => write!(f, "Error"),
        }
    }
}

/// Result of a call-control operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOutcome {
    /// Whether the operation completed as requested.
    pub success: bool,
    /// What happened.
    pub status: CallStatus,
}

/// Outcome status of [`GsmModem::send_sms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsStatus {
    /// The final drain acknowledged the message.
    Sent,
    /// Text mode could not be enabled; the remaining steps were skipped.
    TextModeFailed,
    /// The message body was written but never acknowledged.
    Error,
}

impl std::fmt::Display for SmsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmsStatus::Sent => write!(f, "Sms Sent"),
            SmsStatus::TextModeFailed => write!(f, "Unable to activate sms text mode"),
            SmsStatus::Error => write!(f, "Error"),
        }
    }
}

/// Result of [`GsmModem::send_sms`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsOutcome {
    /// Whether the message was acknowledged.
    pub success: bool,
    /// What happened.
    pub status: SmsStatus,
    /// The raw reply from the step that decided the outcome.
    pub raw: String,
}

/// Raw result of an SMS storage query (`AT+CMGL` / `AT+CMGR`).
///
/// No structured extraction is attempted; SMS listing formats vary enough
/// between modems that callers parse the raw text themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsReadout {
    /// Whether the reply carried the `OK` marker.
    pub ok: bool,
    /// The raw modem listing.
    pub raw: String,
}

/// A connected GSM/GPRS modem driven over AT commands.
///
/// Constructed via [`GsmBuilder`](crate::builder::GsmBuilder). The modem
/// exclusively owns its transport; serialize access by owning the
/// `GsmModem` from a single task.
pub struct GsmModem {
    transport: Box<dyn Transport>,
    delay: Box<dyn Delay>,
    settle: Duration,
    ongoing_call: bool,
    phase: EnginePhase,
}

impl GsmModem {
    /// Create a new `GsmModem` from its constituent parts.
    ///
    /// This is called by [`GsmBuilder`](crate::builder::GsmBuilder); callers
    /// should use the builder API instead.
    pub(crate) fn new(
        transport: Box<dyn Transport>,
        delay: Option<Box<dyn Delay>>,
        settle: Duration,
    ) -> Self {
        GsmModem {
            transport,
            delay: delay.unwrap_or_else(|| Box::new(TokioDelay)),
            settle,
            ongoing_call: false,
            phase: EnginePhase::Idle,
        }
    }

    /// Whether a call initiated by [`make_call`](Self::make_call) is
    /// believed to be in progress.
    pub fn ongoing_call(&self) -> bool {
        self.ongoing_call
    }

    /// The engine's current position in the exchange cycle.
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Close the underlying transport.
    pub async fn close(&mut self) -> Result<()> {
        self.transport.close().await
    }

    /// Perform one full exchange: write, settle, drain, decode.
    async fn exchange(&mut self, cmd: &[u8], settle: Duration) -> Result<AtReply> {
        trace!(cmd = ?cmd, settle_ms = settle.as_millis() as u64, "AT exchange");

        self.transport.send(cmd).await?;
        self.phase = EnginePhase::CommandSent;

        self.phase = EnginePhase::AwaitingSettle;
        self.delay.delay(settle).await;

        let mut buf = [0u8; DRAIN_CAPACITY];
        let n = self.transport.read_available(&mut buf).await?;
        self.phase = EnginePhase::Responded;

        let reply = protocol::decode_reply(&buf[..n])?;
        trace!(ok = reply.ok, bytes = n, "AT reply drained");

        // The reply is handed to the caller; the exchange is over.
        self.phase = EnginePhase::Idle;
        Ok(reply)
    }

    /// Shared body of the five identity queries: on `OK`, the payload is
    /// the second line of the echo-split reply.
    async fn identity_query(&mut self, cmd: Vec<u8>) -> Result<Option<String>> {
        let reply = self.exchange(&cmd, self.settle).await?;
        match protocol::classify_reply(&reply, ReplyShape::Lines) {
            ClassifiedReply::OkWithLines(lines) => Ok(lines.get(1).cloned()),
            _ => Ok(None),
        }
    }

    // ---------------------------------------------------------------
    // Status queries
    // ---------------------------------------------------------------

    /// Probe whether the modem is alive (`AT`).
    ///
    /// Returns `true` iff the reply contains the `OK` marker.
    pub async fn modem_active(&mut self) -> Result<bool> {
        let reply = self.exchange(&commands::cmd_attention(), self.settle).await?;
        Ok(reply.ok)
    }

    /// Query signal strength (`AT+CSQ`).
    ///
    /// Returns `Ok(None)` when the modem did not acknowledge the query --
    /// never a zero-valued report.
    pub async fn signal_strength(&mut self) -> Result<Option<SignalReport>> {
        let reply = self
            .exchange(&commands::cmd_signal_quality(), self.settle)
            .await?;
        match protocol::classify_reply(&reply, ReplyShape::Value) {
            ClassifiedReply::OkWithValue(value) => {
                Ok(Some(commands::parse_signal_report(&value)?))
            }
            _ => Ok(None),
        }
    }

    /// Query the modem manufacturer (`AT+CGMI`).
    pub async fn manufacturer(&mut self) -> Result<Option<String>> {
        self.identity_query(commands::cmd_manufacturer()).await
    }

    /// Query the modem model (`AT+CGMM`).
    pub async fn model(&mut self) -> Result<Option<String>> {
        self.identity_query(commands::cmd_model()).await
    }

    /// Query the firmware revision (`AT+CGMR`).
    pub async fn revision(&mut self) -> Result<Option<String>> {
        self.identity_query(commands::cmd_revision()).await
    }

    /// Query the modem serial number (`AT+CGSN`).
    pub async fn serial_number(&mut self) -> Result<Option<String>> {
        self.identity_query(commands::cmd_serial_number()).await
    }

    /// Query the international mobile subscriber identity (`AT+CIMI`).
    pub async fn subscriber_identity(&mut self) -> Result<Option<String>> {
        self.identity_query(commands::cmd_subscriber_identity()).await
    }

    // ---------------------------------------------------------------
    // Call control
    // ---------------------------------------------------------------

    /// Dial a number (`ATD<number>;`).
    ///
    /// On acknowledgment, records the call as ongoing and returns `true`.
    /// On failure returns `false` with the call state unchanged.
    pub async fn make_call(&mut self, number: &str) -> Result<bool> {
        let reply = self.exchange(&commands::cmd_dial(number), self.settle).await?;
        if reply.ok {
            debug!(number, "call placed");
            self.ongoing_call = true;
            Ok(true)
        } else {
            debug!(number, "dial not acknowledged");
            Ok(false)
        }
    }

    /// Dial a number, let it ring for `ring`, then hang up.
    ///
    /// This operation intentionally does not touch the `ongoing_call` flag,
    /// matching the long-standing behavior of the reference implementation:
    /// a missed call is treated as self-contained, even in the window where
    /// the call is live.
    pub async fn make_missed_call(&mut self, number: &str, ring: Duration) -> Result<CallOutcome> {
        let dial_reply = self.exchange(&commands::cmd_dial(number), self.settle).await?;
        if !dial_reply.ok {
            return Ok(CallOutcome {
                success: false,
                status: CallStatus::UnableToMakeCall,
            });
        }

        debug!(number, ring_ms = ring.as_millis() as u64, "ringing before hangup");
        self.delay.delay(ring).await;

        let hangup_reply = self.exchange(&commands::cmd_hangup(), self.settle).await?;
        if hangup_reply.ok {
            Ok(CallOutcome {
                success: true,
                status: CallStatus::Missed,
            })
        } else {
            Ok(CallOutcome {
                success: false,
                status: CallStatus::Error,
            })
        }
    }

    /// End the call previously placed with [`make_call`](Self::make_call).
    ///
    /// When no call is ongoing this is a pure no-op: nothing is written to
    /// the transport and the outcome is `No Ongoing Call`.
    pub async fn end_ongoing_call(&mut self) -> Result<CallOutcome> {
        if !self.ongoing_call {
            return Ok(CallOutcome {
                success: false,
                status: CallStatus::NoOngoingCall,
            });
        }

        let reply = self.exchange(&commands::cmd_hangup(), self.settle).await?;
        if reply.ok {
            debug!("call ended");
            self.ongoing_call = false;
            Ok(CallOutcome {
                success: true,
                status: CallStatus::Cancelled,
            })
        } else {
            Ok(CallOutcome {
                success: false,
                status: CallStatus::Error,
            })
        }
    }

    // ---------------------------------------------------------------
    // SMS
    // ---------------------------------------------------------------

    /// Send an SMS in text mode.
    ///
    /// Three-step exchange:
    /// 1. `AT+CMGF=1` (3 s settle) -- must be acknowledged with `OK`, or
    ///    the operation short-circuits.
    /// 2. `AT+CMGS="<number>"` (3 s settle) -- the drain doubles as the
    ///    input-buffer reset before the body is written. The modem answers
    ///    with a `>` prompt rather than `OK`, so this step is not
    ///    OK-checked.
    /// 3. message body + Ctrl-Z (10 s settle) -- the final drain decides
    ///    success.
    pub async fn send_sms(&mut self, number: &str, message: &str) -> Result<SmsOutcome> {
        let mode_reply = self
            .exchange(&commands::cmd_sms_text_mode(), SMS_SETUP_SETTLE)
            .await?;
        if !mode_reply.ok {
            return Ok(SmsOutcome {
                success: false,
                status: SmsStatus::TextModeFailed,
                raw: mode_reply.raw,
            });
        }

        let _prompt = self
            .exchange(&commands::cmd_sms_recipient(number), SMS_SETUP_SETTLE)
            .await?;

        let mut body = message.as_bytes().to_vec();
        body.push(CTRL_Z);
        let final_reply = self.exchange(&body, SMS_SEND_SETTLE).await?;

        if final_reply.ok {
            debug!(number, "sms acknowledged");
            Ok(SmsOutcome {
                success: true,
                status: SmsStatus::Sent,
                raw: final_reply.raw,
            })
        } else {
            Ok(SmsOutcome {
                success: false,
                status: SmsStatus::Error,
                raw: final_reply.raw,
            })
        }
    }

    /// List all stored SMS (`AT+CMGL="ALL"`), returning the raw listing.
    pub async fn read_all_sms(&mut self) -> Result<SmsReadout> {
        let reply = self
            .exchange(&commands::cmd_sms_list_all(), self.settle)
            .await?;
        Ok(SmsReadout {
            ok: reply.ok,
            raw: reply.raw,
        })
    }

    /// Read one stored SMS by storage index (`AT+CMGR=<id>`), returning
    /// the raw listing.
    pub async fn read_sms_by_id(&mut self, id: u32) -> Result<SmsReadout> {
        let reply = self.exchange(&commands::cmd_sms_read(id), self.settle).await?;
        Ok(SmsReadout {
            ok: reply.ok,
            raw: reply.raw,
        })
    }
}
