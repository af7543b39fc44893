use tessera_core::text::{RevealTiming, SegmentKind, SplitMode, segment};

fn main() {
    let timing = RevealTiming::default();
    let text = "Building things for the web";

    for mode in [SplitMode::Words, SplitMode::Chars, SplitMode::Lines] {
        let parts = segment(text, mode);
        let animated = parts.iter().filter(|s| s.stagger_index.is_some()).count();
        println!("{mode:?}: {} segments, {animated} animated", parts.len());
        for part in parts.iter().filter(|s| s.kind != SegmentKind::Space).take(4) {
            let delay = part.delay(&timing).unwrap_or_default();
            println!("  {:>5}ms  {:?}", delay.as_millis(), part.text);
        }
    }
}
