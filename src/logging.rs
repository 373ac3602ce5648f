//! Log output.
//!
//! Events go to stderr so stdout carries only command output. `RUST_LOG`
//! overrides the default filter, which keeps `info` so registrations,
//! bookings and contact messages are always recorded.

use std::io;

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "agro_rent=info";

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    subscriber(filter, io::stderr).init();
}

fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use crate::contact::{ContactMessage, send_contact_message};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Captured {
        type Writer = Self;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn default_filter_records_contact_messages() {
        let captured = Captured::default();
        let subscriber = subscriber(EnvFilter::new(DEFAULT_FILTER), captured.clone());
        let message = ContactMessage {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9123456789".into(),
            message: "Is the harvester free next week?".into(),
        };

        tracing::subscriber::with_default(subscriber, || {
            send_contact_message(&message, "agrorent@gmail.com").unwrap();
            tracing::debug!("query detail");
        });

        let out = captured.text();
        assert!(out.contains("contact message received"), "{out}");
        assert!(out.contains("agrorent@gmail.com"), "{out}");
        assert!(out.contains("Is the harvester free next week?"), "{out}");
        assert!(!out.contains("query detail"), "{out}");
    }
}
