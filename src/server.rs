use std::net::{SocketAddr, UdpSocket};

use log::{info, warn};

use crate::decoder::decode;
use crate::errors::DecodeError;
use crate::messages::NetflowMessage;
use crate::time::export_time;

//one whole udp payload, a v9 datagram never needs more
const RECEIVE_BUFFER_SIZE: usize = 65535;

/// Blocking UDP listener that feeds every received datagram through the
/// decoder. Decoding is stateless per datagram, the server keeps nothing
/// between packets except the socket and its receive buffer.
pub struct NetflowServer {
    pub socket: UdpSocket,
    local_addr: SocketAddr,
    receive_buffer: Vec<u8>,
}

impl NetflowServer {
    pub fn new(addr_and_port: &str) -> Self {
        let socket = UdpSocket::bind(addr_and_port).expect("Unable to bind socket");
        let local_addr = socket
            .local_addr()
            .expect("Unable to read the bound socket address");
        NetflowServer {
            socket,
            local_addr,
            receive_buffer: vec![0; RECEIVE_BUFFER_SIZE],
        }
    }

    /// Receives one datagram and decodes it. A malformed datagram comes back
    /// as an error, the next call moves on to the next datagram.
    pub fn recv_message(&mut self) -> Result<NetflowMessage, DecodeError> {
        let (byte_count, source_address) = self
            .socket
            .recv_from(&mut self.receive_buffer)
            .expect("Error receiving from the socket");

        decode(
            &self.receive_buffer[..byte_count],
            source_address,
            self.local_addr,
        )
    }

    pub fn run(&mut self, mut handler: impl FnMut(NetflowMessage)) {
        loop {
            match self.recv_message() {
                Ok(message) => {
                    info!(
                        "decoded {} flowsets from {}, exported at {}",
                        message.flowsets.len(),
                        message.sender,
                        export_time(message.timestamp)
                    );
                    handler(message);
                }
                Err(e) => {
                    //fail the datagram, keep the stream
                    warn!("discarding datagram: {e}");
                }
            }
        }
    }
}
