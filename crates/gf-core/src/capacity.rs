/// Integer capacity type used throughout the flow engine.
///
/// Unsigned by construction: negative capacities are unrepresentable,
/// so callers cannot smuggle them in.
pub type Capacity = u64;

/// Flow carried on an edge; same scalar as [`Capacity`].
pub type Flow = u64;

/// Sentinel for an unconstrained capacity.
///
/// Plain `u64::MAX`: an edge with this capacity can absorb any bottleneck
/// a bounded network produces, and ordinary integer arithmetic on it stays
/// well-defined. Residual totals use [`saturating_flow_add`] so a network
/// built entirely from sentinels cannot wrap.
pub const UNBOUNDED: Capacity = Capacity::MAX;

/// Add two flow amounts, clamping at the representable maximum.
pub fn saturating_flow_add(a: Flow, b: Flow) -> Flow {
    a.saturating_add(b)
}
