use redact_gen::layout::{layout_records, LayoutConfig};
use redact_gen::{
    export_json, export_markdown, import_json, redact_selection, render_svg, FixedMetrics, Px,
    Session,
};

#[test]
fn sample_transcript_round_trips_through_json() {
    let session = Session::sample();
    let json = export_json(session.records()).unwrap();
    let imported = import_json(&json).unwrap();
    assert_eq!(imported.as_slice(), session.records());
}

#[test]
fn sample_transcript_renders_concealed_svg() {
    let session = Session::sample();
    let metrics = FixedMetrics::default();
    let layout = layout_records(session.records(), &LayoutConfig::default(), &metrics);
    assert!(layout.height > Px(0.0));

    let svg = render_svg(&layout);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));

    // every redaction marker in the sample conceals the text "REDACTED";
    // none of it may survive into the rendered output
    assert!(!svg.contains("REDACTED"));

    // plain words still render as text runs
    assert!(svg.contains(">Just<"));
    assert!(svg.contains(">call<"));

    // four redaction rects plus the background, two separators between the
    // three records
    assert_eq!(svg.matches("<rect").count(), 5);
    assert_eq!(svg.matches("<line ").count(), 2);
}

#[test]
fn editing_session_to_export_scenario() {
    let mut session = Session::sample();

    // add a blank block, write a body, then redact part of it
    session.add();
    session.active_mut().body = "meet at the usual place".to_string();
    let (redacted, selection) = redact_selection(&session.active().body, 12..23);
    assert_eq!(&redacted[selection], "usual place");
    session.active_mut().body = redacted;

    let metrics = FixedMetrics::default();
    let layout = layout_records(session.records(), &LayoutConfig::default(), &metrics);
    let svg = render_svg(&layout);
    assert!(svg.contains(">meet<"));
    assert!(!svg.contains("usual place"));

    // the markdown export keeps markers verbatim
    let md = export_markdown(session.records());
    assert!(md.contains("<redact>usual place</redact>"));
    assert_eq!(md.matches("## Block").count(), 4);

    // and the JSON export of the grown session still round-trips
    let imported = import_json(&export_json(session.records()).unwrap()).unwrap();
    assert_eq!(imported.as_slice(), session.records());
}
