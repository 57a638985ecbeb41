//! Native action descriptions
//!
//! The result screen offers buttons (open link, call, send SMS, ...). This
//! module only describes those actions with the arguments they need; the
//! caller decides how to dispatch them on its platform.

use crate::classifier::uri::has_web_scheme;
use crate::config;
use crate::interpret::{Interpretation, Payload};
use crate::models::PayloadKind;
use crate::parser::inline::{after_identifier, sms_block_count};
use serde::{Deserialize, Serialize};

/// Settings used when building action targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Base URL the url-encoded text is appended to for searches
    pub search_base: String,
    /// Scheme prefixed to links without an `http://` or `https://` scheme
    pub link_scheme: String,
}

impl ActionConfig {
    /// Settings from `QR_SEARCH_URL` / `QR_LINK_SCHEME`, with defaults
    pub fn from_env() -> Self {
        Self {
            search_base: config::search_url().to_string(),
            link_scheme: config::link_scheme().to_string(),
        }
    }
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// One action a result screen can offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Open a link in the browser
    OpenLink {
        /// Absolute URL
        url: String,
    },
    /// Start a phone call
    Call {
        /// `tel:` URI as scanned
        uri: String,
    },
    /// Compose an SMS
    SendSms {
        /// Recipient number
        number: String,
        /// Message text
        body: String,
    },
    /// Compose an e-mail
    SendMail {
        /// Recipient address
        to: String,
        /// Subject line
        subject: String,
        /// Message body
        body: String,
    },
    /// Show coordinates in a map app
    ShowOnMap {
        /// `geo:?q=<coords>` URI
        uri: String,
    },
    /// Start navigation to coordinates
    Navigate {
        /// Coordinates as scanned
        destination: String,
    },
    /// Search the text on the web
    Search {
        /// Search URL
        url: String,
    },
    /// Copy text to the clipboard
    Copy {
        /// Text to copy
        text: String,
    },
}

/// Build the actions offered for an interpretation. Copy is always last.
pub fn actions_for(interpretation: &Interpretation, config: &ActionConfig) -> Vec<Action> {
    let text = interpretation.text.as_str();
    let mut actions = Vec::new();

    match (&interpretation.kind, &interpretation.payload) {
        (PayloadKind::Uri, _) => actions.push(Action::OpenLink {
            url: link_url(text.trim(), config),
        }),
        (PayloadKind::Tel, _) => actions.push(Action::Call {
            uri: text.trim().to_string(),
        }),
        (PayloadKind::Sms, Payload::Sms(sms)) => {
            if sms_block_count(text) >= 3 {
                actions.push(Action::SendSms {
                    number: sms.number.clone(),
                    body: sms.body.clone(),
                });
            }
        }
        (PayloadKind::Mail, Payload::Mail(mail)) => actions.push(Action::SendMail {
            to: mail.address.clone(),
            subject: mail.subject.clone(),
            body: mail.body.clone(),
        }),
        (PayloadKind::Geo, _) => {
            let coordinates = after_identifier(text.trim());
            actions.push(Action::ShowOnMap {
                uri: format!("geo:?q={coordinates}"),
            });
            actions.push(Action::Navigate {
                destination: coordinates.to_string(),
            });
        }
        (PayloadKind::PlainSearch, _) => actions.push(Action::Search {
            url: format!("{}{}", config.search_base, urlencoding::encode(text)),
        }),
        _ => {}
    }

    let copy = match interpretation.kind {
        PayloadKind::Wifi | PayloadKind::Contact => interpretation.display.clone(),
        _ => text.to_string(),
    };
    actions.push(Action::Copy { text: copy });

    actions
}

fn link_url(text: &str, config: &ActionConfig) -> String {
    if has_web_scheme(text) {
        text.to_string()
    } else {
        format!("{}{}", config.link_scheme, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::interpret;
    use crate::models::ScanResult;

    fn config() -> ActionConfig {
        ActionConfig {
            search_base: "https://search.example/?q=".into(),
            link_scheme: "http://".into(),
        }
    }

    fn actions(text: &str) -> Vec<Action> {
        actions_for(&interpret(&ScanResult::qr(text)), &config())
    }

    #[test]
    fn test_link_gets_scheme() {
        assert_eq!(
            actions("example.com/a")[0],
            Action::OpenLink {
                url: "http://example.com/a".into()
            }
        );
        assert_eq!(
            actions("https://example.com")[0],
            Action::OpenLink {
                url: "https://example.com".into()
            }
        );
    }

    #[test]
    fn test_schemeless_http_host_gets_scheme() {
        assert_eq!(
            actions("httpbin.org/get")[0],
            Action::OpenLink {
                url: "http://httpbin.org/get".into()
            }
        );
    }

    #[test]
    fn test_call_uses_raw_uri() {
        assert_eq!(
            actions("tel:+420123"),
            vec![
                Action::Call {
                    uri: "tel:+420123".into()
                },
                Action::Copy {
                    text: "tel:+420123".into()
                },
            ]
        );
    }

    #[test]
    fn test_sms_needs_three_blocks() {
        assert_eq!(
            actions("smsto:555:Hi: there")[0],
            Action::SendSms {
                number: "555".into(),
                body: "Hi: there".into()
            }
        );
        assert_eq!(actions("sms:555").len(), 1);
    }

    #[test]
    fn test_mail() {
        assert_eq!(
            actions("mailto:a@b.com?subject=Hi&body=Yo")[0],
            Action::SendMail {
                to: "a@b.com".into(),
                subject: "Hi".into(),
                body: "Yo".into()
            }
        );
    }

    #[test]
    fn test_geo_offers_map_and_navigation() {
        let geo = actions("geo:50.087,14.421");
        assert_eq!(
            geo[0],
            Action::ShowOnMap {
                uri: "geo:?q=50.087,14.421".into()
            }
        );
        assert_eq!(
            geo[1],
            Action::Navigate {
                destination: "50.087,14.421".into()
            }
        );
    }

    #[test]
    fn test_search_is_url_encoded() {
        assert_eq!(
            actions("red shoes & socks")[0],
            Action::Search {
                url: "https://search.example/?q=red%20shoes%20%26%20socks".into()
            }
        );
    }

    #[test]
    fn test_wifi_copies_display() {
        assert_eq!(
            actions("WIFI:T:WPA;S:net;P:pw;;"),
            vec![Action::Copy {
                text: "WPA | net | pw".into()
            }]
        );
    }

    #[test]
    fn test_action_json_tag() {
        let json = serde_json::to_value(Action::Navigate {
            destination: "1,2".into(),
        })
        .unwrap();
        assert_eq!(json["action"], "navigate");
        assert_eq!(json["destination"], "1,2");
    }
}
