//! Cipher Arena Demo
//!
//! Runs a seeded bot arena end to end: one shared secret, a field of bots,
//! standings, settlement and a replay check on the settlement digest.

use anyhow::{ensure, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use cipher_arena::{
    config::ArenaConfig,
    core::rng::string_to_seed,
    cosmetic::{environment_for_round, MemoryFlagStore, PresentationFlags},
    economy::{
        arena::{calculate_arena_pool, settle, Settlement},
        payout::itm_count,
        standings::{rank_field, FieldEntry},
        tier::{calculate_balance_breakdown, Tier},
    },
    game::{bot::Bot, round::Round, secret::generate_seeded_secret, symbol::SYMBOL_COUNT},
    Amount, VERSION,
};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ArenaConfig::from_env();
    let run_id = Uuid::new_v4();

    info!("Cipher Arena v{}", VERSION);
    info!(%run_id, ?config, "starting demo arena");

    let settlement = run_arena(&config)?;
    for payout in &settlement.payouts {
        info!("#{}: {} wins {}", payout.rank, payout.player_id, payout.amount);
    }
    let digest = settlement.digest();
    info!("Settlement digest: {}", hex::encode(digest));
    println!(
        "{}",
        serde_json::to_string_pretty(&settlement).context("failed to encode settlement")?
    );

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let replay = run_arena(&config)?;
    let replay_digest = replay.digest();
    info!("Replay digest: {}", hex::encode(replay_digest));
    ensure!(digest == replay_digest, "settlement replay diverged");
    info!("DETERMINISM VERIFIED: digests match");

    demo_balances();
    Ok(())
}

/// Play one round for the whole field and settle it.
fn run_arena(config: &ArenaConfig) -> Result<Settlement> {
    let round_id = format!("arena-{}-round-1", config.seed);
    let secret = generate_seeded_secret(string_to_seed(&round_id));

    let mut flags_store = MemoryFlagStore::new();
    PresentationFlags::default().save(&mut flags_store);
    let flags = PresentationFlags::load(&flags_store);
    if let Some(env) = environment_for_round(&flags, &round_id, SYMBOL_COUNT, chrono::Utc::now()) {
        info!(
            round_id = %round_id,
            rotation = env.rotation_deg(),
            spacing = env.spacing(),
            background = env.background_pattern(),
            "environment: {}",
            hex::encode(env.digest())
        );
    }

    let pool = calculate_arena_pool(config.buy_in, config.rake_fee, config.field_size)
        .context("invalid arena parameters")?;
    info!(
        players = config.field_size,
        itm = itm_count(config.field_size),
        pool = %pool.pool,
        rake = %pool.rake_total,
        "field open"
    );

    let mut entries = Vec::with_capacity(config.field_size as usize);
    for i in 0..config.field_size {
        let bot_seed = config.seed.wrapping_add(i.wrapping_mul(0x9E37_79B9));
        let mut round = Round::with_max_attempts(secret, config.max_attempts);
        Bot::new(bot_seed).play(&mut round)?;

        // Simulated think time per guess
        let elapsed_ms = round.attempts() as u64 * 7_000 + (bot_seed % 5_000) as u64;
        entries.push(FieldEntry::from_round(format!("bot-{i:03}"), &round, elapsed_ms));
    }

    let standings = rank_field(entries)?;
    let settlement = settle(&pool, &standings)?;
    Ok(settlement)
}

/// Log balance breakdowns for each tier.
fn demo_balances() {
    info!("=== Tier Balances ===");
    let energy = Amount::from_major(750);
    for tier in Tier::ALL {
        let b = calculate_balance_breakdown(energy, tier.label(), 2);
        info!(
            "{}: total {} locked {} available {} ({} of {} invites left)",
            tier, b.total, b.locked, b.available, b.slots_remaining, b.max_invites
        );
    }
}
