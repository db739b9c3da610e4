//! Tests arithmétiques (campagne) : priorités + identités + limites contrôlées.
//!
//! But : couvrir les combinaisons qui fâchent, sans faire chauffer la machine.
//! - priorités complètes (moins unaire, `^` à droite, `mod` plancher)
//! - identités numériques (ln/exp, log10, log2, sqrt)
//! - rendu 7 chiffres significatifs sur des valeurs connues
//! - stress borné (profondeur, longueur) avec budget temps

use std::time::{Duration, Instant};

use super::eval::evaluer;
use super::format::format_7g;

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_vaut(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    let tol = 1e-9 * attendu.abs().max(1.0);
    assert!(
        (v - attendu).abs() <= tol,
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

fn assert_rendu(expr: &str, attendu: &str) {
    let v = eval_ok(expr);
    assert_eq!(format_7g(v), attendu, "expr={expr:?} v={v}");
}

fn assert_meme_valeur(a: &str, b: &str) {
    let va = eval_ok(a);
    let vb = eval_ok(b);
    let tol = 1e-9 * va.abs().max(1.0);
    assert!((va - vb).abs() <= tol, "a={a:?} va={va} b={b:?} vb={vb}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn arith_moins_unaire_et_caret() {
    // le moins unaire s'applique au résultat de la puissance
    assert_vaut("-2^2", -4.0);
    assert_meme_valeur("-2^2", "-(2^2)");

    // mais un exposant peut lui-même être négatif
    assert_vaut("2^-3", 0.125);
    assert_meme_valeur("2^-3", "2^(0-3)");
    assert_vaut("2^-3^2", 1.0 / 512.0);
}

#[test]
fn arith_caret_assoc_droite() {
    // 2^3^2 = 2^9, pas (2^3)^2
    assert_vaut("2^3^2", 512.0);
    assert_meme_valeur("2^3^2", "2^(3^2)");
    assert_vaut("(2^3)^2", 64.0);
}

#[test]
fn arith_mod_et_moins_unaire() {
    // le moins unaire se lie à son opérande, pas à tout le mod
    assert_vaut("-5 mod 3", 1.0);
    assert_meme_valeur("-5 mod 3", "(-5) mod 3");

    // le moins binaire, lui, reste sous le mod
    assert_vaut("0-5 mod 3", -2.0);
}

#[test]
fn arith_priorites_classiques() {
    assert_vaut("2+3*4", 14.0);
    assert_vaut("2*3+4", 10.0);
    assert_vaut("2+12/4", 5.0);
    assert_vaut("(2+3)*4", 20.0);
    assert_vaut("2*3^2", 18.0);
    assert_vaut("10-4-3", 3.0);
    assert_vaut("24/4/2", 3.0);
}

#[test]
fn arith_fonctions_prefixes() {
    // une fonction prend l'opérande le plus proche, avant `^`
    assert_vaut("sqrt 16 + 9", 13.0);
    assert_meme_valeur("sqrt 2^2", "(sqrt 2)^2");
    assert_vaut("ln exp 1", 1.0);
}

/* ------------------------ Identités numériques ------------------------ */

#[test]
fn arith_ln_exp_inverses() {
    for x in [0.5_f64, 1.0, 2.0, 10.0] {
        let v = eval_ok(&format!("ln(exp({x}))"));
        assert!((v - x).abs() <= 1e-9 * x.abs().max(1.0), "x={x} v={v}");
    }
}

#[test]
fn arith_logs_sur_puissances_exactes() {
    for k in 0..=6 {
        assert_vaut(&format!("log10(10^{k})"), k as f64);
        assert_vaut(&format!("log2(2^{k})"), k as f64);
    }
}

#[test]
fn arith_sqrt_au_carre() {
    for x in [2.0_f64, 3.0, 10.0, 0.25] {
        let v = eval_ok(&format!("sqrt({x})^2"));
        assert!((v - x).abs() <= 1e-9 * x.abs().max(1.0), "x={x} v={v}");
    }
}

/* ------------------------ Modulo plancher ------------------------ */

#[test]
fn arith_mod_plancher_grille() {
    // le résultat suit le signe du diviseur
    let cas: [(f64, f64, f64); 6] = [
        (5.0, 3.0, 2.0),
        (-5.0, 3.0, 1.0),
        (5.0, -3.0, -1.0),
        (-5.0, -3.0, -2.0),
        (7.5, 2.0, 1.5),
        (-7.0, 2.5, 0.5),
    ];
    for (a, b, attendu) in cas {
        assert_vaut(&format!("{a} mod {b}"), attendu);
    }
}

/* ------------------------ Rendu 7 chiffres ------------------------ */

#[test]
fn arith_rendu_sept_chiffres() {
    assert_rendu("2+2", "4");
    assert_rendu("0-4", "-4");
    assert_rendu("10/4", "2.5");
    assert_rendu("1/3", "0.3333333");
    assert_rendu("2^20", "1048576");
    assert_rendu("10^7", "1e+07");
    assert_rendu("1/10^5", "1e-05");
    assert_rendu("0.1+0.2", "0.3");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn arith_stress_somme_plate() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..80 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    // 80*(0.5)=40
    assert_rendu(&expr, "40");
}

#[test]
fn arith_stress_imbrication() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = "1".to_string();
    for _ in 0..60 {
        expr = format!("(1+{expr})");
        budget(t0, max);
    }

    assert_vaut(&expr, 61.0);
}

#[test]
fn arith_stress_sqrt_carre_alterne() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // sqrt puis ^2 : la valeur reste exactement 4 à chaque tour
    let mut expr = "4".to_string();
    for _ in 0..40 {
        expr = format!("sqrt({expr})^2");
        budget(t0, max);
    }

    assert_rendu(&expr, "4");
}
