use super::wire::{build_response, parse_query};
use minidns_application::use_cases::AnswerQueryUseCase;
use minidns_domain::DomainError;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns one inbound datagram into the datagram to send back.
pub struct DnsServerHandler {
    use_case: Arc<AnswerQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<AnswerQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns `None` when nothing should be sent: the datagram could not be
    /// decoded, was itself a response, or the reply could not be built.
    pub fn handle_datagram(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match parse_query(datagram) {
            Ok(query) => query,
            Err(e) => {
                warn!(
                    client = %client,
                    bytes = datagram.len(),
                    error = %e,
                    "Dropping undecodable datagram"
                );
                return None;
            }
        };

        if query.is_response() {
            debug!(client = %client, id = query.id, "Ignoring datagram with QR bit set");
            return None;
        }

        if !query.is_a_in() {
            debug!(
                domain = %query.domain,
                qtype = query.qtype,
                qclass = query.qclass,
                "Question is not A/IN, answering from the A table anyway"
            );
        }

        let trailing = datagram.len().saturating_sub(query.question_end);
        if trailing > 0 {
            debug!(
                domain = %query.domain,
                trailing_bytes = trailing,
                "Bytes after the question are echoed unchanged"
            );
        }

        info!(client = %client, domain = %query.domain, id = query.id, "DNS query received");

        let addresses: Arc<[Ipv4Addr]> = match self.use_case.execute(&query.domain) {
            Ok(addresses) => addresses,
            Err(DomainError::NameNotFound(_)) => Arc::from(Vec::<Ipv4Addr>::new()),
            Err(e) => {
                error!(domain = %query.domain, error = %e, "Lookup failed");
                return None;
            }
        };

        match build_response(datagram, &addresses) {
            Ok(response) => {
                if addresses.is_empty() {
                    info!(domain = %query.domain, "No record, answering NXDOMAIN");
                } else {
                    info!(
                        domain = %query.domain,
                        answers = addresses.len(),
                        "Answering from table"
                    );
                }
                Some(response)
            }
            Err(e) => {
                error!(
                    client = %client,
                    domain = %query.domain,
                    error = %e,
                    "Failed to build response"
                );
                None
            }
        }
    }
}
