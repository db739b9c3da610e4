// src/noyau/format.rs
//
// Rendu décimal "sept chiffres significatifs" (équivalent du %.7g de C) :
// - notation fixe si l'exposant décimal X (après arrondi) vérifie -4 <= X < 7
// - notation scientifique sinon : mantisse épurée + exposant signé sur 2 chiffres
// - zéros de fin retirés, ainsi que le point s'il reste seul
// - le zéro (et le zéro négatif) s'affiche "0"

/// Formate `x` sur au plus sept chiffres significatifs.
///
/// Exemples:
///   4.0        -> "4"
///   1.0/3.0    -> "0.3333333"
///   10000000.0 -> "1e+07"
///   0.00001    -> "1e-05"
pub fn format_7g(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    // Forme scientifique arrondie à 7 chiffres significatifs : elle donne
    // l'exposant décimal X du nombre arrondi (l'arrondi peut le faire monter,
    // ex: 0.99999995 -> 1.000000e0).
    let sci = format!("{x:.6e}");
    let (mantisse, exposant) = match sci.split_once('e') {
        Some(p) => p,
        None => return sci,
    };
    let x_exp: i32 = match exposant.parse() {
        Ok(v) => v,
        Err(_) => return sci,
    };

    if (-4..7).contains(&x_exp) {
        // Notation fixe, 7 chiffres significatifs au total.
        let precision = (6 - x_exp) as usize;
        let mut s = format!("{x:.precision$}");
        if s.contains('.') {
            s = s
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string();
        }
        return s;
    }

    // Notation scientifique.
    let m = mantisse.trim_end_matches('0').trim_end_matches('.');
    let signe = if x_exp < 0 { '-' } else { '+' };
    let a = x_exp.unsigned_abs();
    format!("{m}e{signe}{a:02}")
}
