use super::*;

fn patterns() -> NamePatterns {
    NamePatterns::new().unwrap()
}

#[test]
fn full_animation_extracts_base_key_and_prefix() {
    let m = patterns().classify("hero_anim_idle_f12");
    assert_eq!(m.kind, SpriteKind::FullAnimation);
    assert_eq!(m.base, "hero");
    assert_eq!(m.key, "idle");
    assert_eq!(m.key_prefix, "hero_anim_idle");
}

#[test]
fn full_animation_keeps_underscored_base() {
    let m = patterns().classify("big_zombie_anim_run_f3");
    assert_eq!(m.base, "big_zombie");
    assert_eq!(m.key, "run");
}

#[test]
fn simple_animation_with_and_without_anim_infix() {
    let p = patterns();

    let m = p.classify("coin_anim_f0");
    assert_eq!(m.kind, SpriteKind::SimpleAnimation);
    assert_eq!(m.base, "coin");
    assert_eq!(m.key, BASE_CLIP_KEY);
    assert_eq!(m.key_prefix, "coin_anim");

    let m = p.classify("flask_f2");
    assert_eq!(m.kind, SpriteKind::SimpleAnimation);
    assert_eq!(m.base, "flask");
    assert_eq!(m.key_prefix, "flask");
}

#[test]
fn variant_needs_single_trailing_digit() {
    let p = patterns();

    let m = p.classify("wall_hole_1");
    assert_eq!(m.kind, SpriteKind::Variant);
    assert_eq!(m.base, "wall_hole");

    assert_eq!(p.classify("floor_12").kind, SpriteKind::Default);
    assert_eq!(p.classify("floor_1_top").kind, SpriteKind::Default);
}

#[test]
fn default_keeps_full_name() {
    let m = patterns().classify("rock");
    assert_eq!(m.kind, SpriteKind::Default);
    assert_eq!(m.base, "rock");
}

#[test]
fn full_animation_outranks_simple() {
    let p = patterns();
    let name = "slime_anim_hit_f1";
    let simple = p.match_kind(SpriteKind::SimpleAnimation, name).unwrap();
    assert_eq!(simple.base, "slime_anim_hit");

    let m = p.classify(name);
    assert_eq!(m.kind, SpriteKind::FullAnimation);
    assert_eq!(m.base, "slime");
}

#[test]
fn simple_outranks_variant() {
    let p = patterns();
    let name = "torch_f1";
    assert!(p.match_kind(SpriteKind::Variant, name).is_none());
    assert_eq!(p.classify(name).kind, SpriteKind::SimpleAnimation);

    // `_f` marker without digits is not an animation frame.
    assert_eq!(p.classify("chest_f").kind, SpriteKind::Default);
}

#[test]
fn default_kind_matches_nothing_directly() {
    assert!(
        patterns()
            .match_kind(SpriteKind::Default, "rock")
            .is_none()
    );
}

#[test]
fn kind_display_is_stable() {
    assert_eq!(SpriteKind::FullAnimation.to_string(), "animation (full)");
    assert_eq!(SpriteKind::SimpleAnimation.to_string(), "animation (simple)");
    assert_eq!(SpriteKind::Variant.to_string(), "variant");
    assert_eq!(SpriteKind::Default.to_string(), "default");
}
