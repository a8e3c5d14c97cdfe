use prometheus::{Encoder, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub quotes_total: IntCounterVec,
    pub verifications_total: IntCounterVec,
    pub plans_configured: IntGauge,
    pub quote_fare_amount: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let quotes_total = IntCounterVec::new(
            Opts::new("quotes_total", "Total fare quote requests by outcome"),
            &["outcome"],
        )
        .expect("valid quotes_total metric");

        let verifications_total = IntCounterVec::new(
            Opts::new(
                "verifications_total",
                "Total quote token verifications by outcome",
            ),
            &["outcome"],
        )
        .expect("valid verifications_total metric");

        let plans_configured =
            IntGauge::new("plans_configured", "Number of active pricing plans")
                .expect("valid plans_configured metric");

        let quote_fare_amount = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "quote_fare_amount",
                "Quoted total fares in currency units",
            )
            .buckets(vec![50.0, 100.0, 200.0, 400.0, 800.0, 1600.0]),
            &["service_type"],
        )
        .expect("valid quote_fare_amount metric");

        registry
            .register(Box::new(quotes_total.clone()))
            .expect("register quotes_total");
        registry
            .register(Box::new(verifications_total.clone()))
            .expect("register verifications_total");
        registry
            .register(Box::new(plans_configured.clone()))
            .expect("register plans_configured");
        registry
            .register(Box::new(quote_fare_amount.clone()))
            .expect("register quote_fare_amount");

        Self {
            registry,
            quotes_total,
            verifications_total,
            plans_configured,
            quote_fare_amount,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
