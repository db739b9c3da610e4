// src/noyau/jetons.rs

use super::erreurs::ErreurLexique;
use super::fonctions::Fonction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions nommées (exp, ln, log10, log2, sqrt), résolues dès le découpage :
    // le vocabulaire est fermé, un mot inconnu est une erreur de lexique.
    Fonction(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // % (le mot-clé "mod" s'y abaisse)

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 2.5, .5, 5.)
/// - opérateurs + - * / ^ %
/// - parenthèses ( )
/// - mots-clés [a-zA-Z_][a-zA-Z0-9_]* : exp, ln, log10, log2, sqrt, mod
///
/// Les mots-clés sont sensibles à la casse : "Sqrt" ou "LOG10" sont rejetés.
/// Le moins n'est jamais plié dans un littéral : "-" reste un jeton, le
/// parse décide s'il est unaire ou binaire.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurLexique> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Mots-clés ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        // (le chiffre reste dans le mot : "log10" est un seul jeton, "exp2" un seul mot inconnu)
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();

            if mot == "mod" {
                out.push(Tok::Percent);
                continue;
            }
            match Fonction::depuis_nom(&mot) {
                Some(f) => out.push(Tok::Fonction(f)),
                None => return Err(ErreurLexique::SymboleInconnu(mot)),
            }
            continue;
        }

        // Nombre décimal : chiffres + au plus un point, au moins un chiffre
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut nb_points = 0usize;
            let mut nb_chiffres = 0usize;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    nb_points += 1;
                } else {
                    nb_chiffres += 1;
                }
                i += 1;
            }
            let brut: String = chars[start..i].iter().collect();

            if nb_points > 1 || nb_chiffres == 0 {
                return Err(ErreurLexique::NombreMalForme(brut));
            }
            let n: f64 = match brut.parse() {
                Ok(v) => v,
                Err(_) => return Err(ErreurLexique::NombreMalForme(brut)),
            };

            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurLexique::SymboleInconnu(c.to_string()));
    }

    Ok(out)
}
