//! Rig inference prompt for layered character art
//!
//! Produces the instruction text handed to an external inference model that
//! would replace the 1:1 layer rig. The answer's shape matches what
//! [`crate::rig::RigInference`] returns.

/// Fixed instruction preamble.
pub const SKELETON_PROMPT: &str = "
You are an expert Spine 2D technical art assistant. Given a list of flattened \
layer names with optional type hints, infer:
1. Bone hierarchy (root anchored at 0,0) with logical parenting
2. Suggested slots (one per visible part unless mirrored)
3. Pivot refinements (0..1 relative factors)
4. Candidate simple procedural idle motions (breathing / head sway / limb micro-arc)
Return JSON keys: bones[], slots[], motions[]. Keep concise.
";

/// Build the prompt for `(name, type)` layer pairs, in layer order.
///
/// # Examples
///
/// ```
/// use rigsynth::prompt::build_prompt;
///
/// let prompt = build_prompt(&[("head", "head"), ("body", "torso")]);
/// assert!(prompt.ends_with("Layers:\n- head: head\n- body: torso\n"));
/// ```
pub fn build_prompt(layers: &[(&str, &str)]) -> String {
    let items: Vec<String> =
        layers.iter().map(|(name, kind)| format!("- {}: {}", name, kind)).collect();
    format!("{}\nLayers:\n{}\n", SKELETON_PROMPT, items.join("\n"))
}
