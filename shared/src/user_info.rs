use serde::{Serialize, Deserialize};

pub const UNKNOWN_CLIENT: &str = "0.0.0.0";

/// Identity of the caller as far as voting is concerned: its IP address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientInfo {
    pub ip: String,
}

impl ClientInfo {
    pub fn new(ip: impl Into<String>) -> Self {
        Self { ip: ip.into() }
    }
}

/// Picks the client address from proxy headers first, then the peer address.
pub fn resolve_client_ip(real_ip: Option<&str>, forwarded_for: Option<&str>, peer: Option<String>) -> String {
    let from_forwarded = forwarded_for
        .and_then(|value| value.split(',').next())
        .map(str::trim);

    real_ip
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .or(from_forwarded.filter(|ip| !ip.is_empty()))
        .map(str::to_string)
        .or(peer)
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for ClientInfo {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            let headers = req.headers();
            let ip = resolve_client_ip(
                headers.get_one("X-Real-IP"),
                headers.get_one("X-Forwarded-For"),
                req.remote().map(|addr| addr.ip().to_string()),
            );

            Outcome::Success(ClientInfo { ip })
        }
    }
}
