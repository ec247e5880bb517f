use rootwalk_application::services::AggregatedRecords;
use rootwalk_application::use_cases::HostReport;
use rootwalk_domain::RecordKind;
use std::fmt::Write;

/// One line per record, kinds in CNAME, A, AAAA, MX order.
pub fn render_text(records: &AggregatedRecords) -> String {
    let mut out = String::new();

    for cname in &records.cname {
        let _ = writeln!(out, "{} is an alias for {}", cname.alias, cname.name);
    }
    for a in &records.a {
        let _ = writeln!(out, "{} has address {}", a.name, a.address);
    }
    for aaaa in &records.aaaa {
        let _ = writeln!(out, "{} has IPv6 address {}", aaaa.name, aaaa.address);
    }
    for mx in &records.mx {
        let _ = writeln!(
            out,
            "{} mail is handled by {} {}",
            mx.name, mx.preference, mx.exchange
        );
    }

    out
}

pub fn render_json(report: &HostReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

/// Verbose diagnostics: how each kind ended up, plus cache and timing.
pub fn render_status(report: &HostReport) -> String {
    let mut out = String::new();
    let source = if report.cache_hit { "cache" } else { "network" };
    let _ = writeln!(
        out,
        ";; {} ({}, {} ms)",
        report.name, source, report.elapsed_ms
    );

    for kind in RecordKind::ALL {
        let _ = writeln!(
            out,
            ";;   {:<5} {:<18} {} record(s)",
            kind.as_str(),
            report.status(kind).as_str(),
            report.records.count(kind)
        );
    }

    out
}
