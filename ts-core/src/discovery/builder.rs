use tracing::*;

use super::*;
use crate::prelude::*;

// Turns one observed endpoint's hint annotations into at most one receiver
// template.  Resolution is a pure function of the endpoint, so one builder
// can be shared freely across concurrently running observer event handlers.
#[derive(Clone, Debug, Default)]
pub struct HintsBuilder {
    config: DiscoveryConfig,
}

impl HintsBuilder {
    pub fn new(config: DiscoveryConfig) -> HintsBuilder {
        HintsBuilder { config }
    }

    // Ok(None) means the endpoint shouldn't get a receiver (nothing enabled,
    // no scraper declared, or the scraper is ignored by policy); an error
    // means the operator's annotations are unusable for this endpoint.  The
    // caller skips the endpoint either way and keeps the discovery loop
    // running.
    pub fn build_template(&self, endpoint: &Endpoint) -> anyhow::Result<Option<ReceiverTemplate>> {
        if !self.config.enabled {
            return Ok(None);
        }
        let Some((pod, maybe_port)) = endpoint.details.pod_and_port() else {
            return Ok(None);
        };

        let scope = maybe_port.map_or(String::new(), |p| p.to_string());
        let signals = SignalSet {
            metrics: hints::hint_enabled(&pod.annotations, Signal::Metrics.hints_prefix(), &scope),
            logs: hints::hint_enabled(&pod.annotations, Signal::Logs.hints_prefix(), &scope),
            traces: hints::hint_enabled(&pod.annotations, Signal::Traces.hints_prefix(), &scope),
        };
        if !signals.any() {
            debug!("no discovery signals enabled for endpoint {}", endpoint.id);
            return Ok(None);
        }

        let Some(scraper) = resolve_scraper(pod, signals, &scope)? else {
            debug!("no scraper hint declared for endpoint {}", endpoint.id);
            return Ok(None);
        };

        // Intentional skip, so check before any config decoding; this must
        // not surface as a failure
        if self.config.ignore_receivers.contains(&scraper) {
            info!("skipping ignored receiver type {scraper} for endpoint {}", endpoint.id);
            return Ok(None);
        }

        // Everything past this point needs a concrete port, both for the
        // receiver name and to give the config a dial target
        let Some(port) = maybe_port else {
            bail!(DiscoveryError::missing_port(&endpoint.id));
        };

        let mut config = ReceiverConfig::new();
        for signal in signals.enabled() {
            config.extend(scraper::resolve_scraper_config(
                &pod.annotations,
                signal.hints_prefix(),
                &scope,
                &endpoint.target,
            )?);
        }

        Ok(Some(ReceiverTemplate {
            id: ReceiverId::new(&scraper, &pod.uid, port),
            config,
            signals,
        }))
    }
}

// All enabled signals share one receiver instance, so any scraper hints they
// declare have to agree; signals that omit the hint defer to the ones that
// declare it, and no declared hint at all means the endpoint is skipped.
fn resolve_scraper(pod: &PodDetails, signals: SignalSet, scope: &str) -> anyhow::Result<Option<String>> {
    let mut scraper: Option<&str> = None;
    for signal in signals.enabled() {
        let Some(declared) = hints::resolve_hint(&pod.annotations, signal.hints_prefix(), scope, SCRAPER_SUFFIX)
        else {
            continue;
        };
        match scraper {
            Some(prev) if prev != declared => {
                bail!(DiscoveryError::conflicting_scrapers(&format!("{prev} vs {declared}")));
            },
            _ => scraper = Some(declared),
        }
    }
    Ok(scraper.map(String::from))
}
