//! Side-by-side layout of artwork and info panel.

/// Join artwork lines with panel lines, separated by a tab.
///
/// The artwork drives the row count: once the panel runs out the remaining
/// artwork lines are printed alone, and panel lines past the artwork's last
/// line are dropped.
pub fn side_by_side(art: &[String], panel: &[String]) -> Vec<String> {
    art.iter()
        .enumerate()
        .map(|(i, line)| match panel.get(i) {
            Some(info) => format!("{line}\t{info}"),
            None => line.clone(),
        })
        .collect()
}
