use std::io::{Read, Write};
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::decoder::decode;
use crate::errors::DecodeError;
use crate::messages::NetflowMessage;

/// A captured datagram and what it decodes to, persisted as JSON so a
/// regression run can replay the raw bytes and compare against the stored
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: Vec<u8>,
    pub expected: NetflowMessage,
}

impl TestCase {
    /// Decodes a live datagram and pairs it with its raw bytes.
    pub fn capture(
        datagram: &[u8],
        sender: SocketAddr,
        recipient: SocketAddr,
    ) -> Result<Self, DecodeError> {
        let expected = decode(datagram, sender, recipient)?;
        Ok(TestCase {
            input: datagram.to_vec(),
            expected,
        })
    }
}

pub fn read_test_case<R: Read>(reader: R) -> serde_json::Result<TestCase> {
    serde_json::from_reader(reader)
}

pub fn write_test_case<W: Write>(writer: W, test_case: &TestCase) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, test_case)
}
