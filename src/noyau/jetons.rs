// src/noyau/jetons.rs

use super::operations::Operateur;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    /// Nombre décimal non signé (ex: 12, 3.5, .25)
    Nombre(f64),

    /// Symbole opérateur parmi `^ * / + -`
    Operateur(Operateur),

    /// Appel complet `sqrt(<nombre>)`, argument déjà lu
    Racine(f64),
}

/// Jeton + index (en caractères) de son début dans la chaîne d'origine.
#[derive(Clone, Copy, Debug)]
pub struct JetonPose {
    pub position: usize,
    pub jeton: Jeton,
}

/// Découpe une chaîne en jetons par pavage strict.
/// Supporte:
/// - nombres décimaux non signés : `12`, `3.5`, `.25` (jamais de point final)
/// - opérateurs ^ * / + -
/// - appels `sqrt(<nombre>)` (seulement en début de mot : `2sqrt(4)` est refusé)
///
/// AUCUN espace toléré. Retourne None dès qu'un caractère ne pave pas :
/// c'est le test de syntaxe (pavage complet = syntaxe valide).
pub fn decouper(s: &str) -> Option<Vec<JetonPose>> {
    let chars: Vec<char> = s.chars().collect();
    let mut out: Vec<JetonPose> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Opérateur (un seul caractère)
        if let Some(op) = Operateur::depuis_symbole(c) {
            out.push(JetonPose {
                position: i,
                jeton: Jeton::Operateur(op),
            });
            i += 1;
            continue;
        }

        // Appel racine : sqrt(<nombre>)
        // Frontière de mot : 's' collé à un chiffre ne démarre pas un appel,
        // et rien d'autre ne peut consommer ce 's' => la chaîne ne pave pas.
        if c == 's' {
            if i > 0 && est_caractere_mot(chars[i - 1]) {
                return None;
            }
            let (valeur, apres) = lire_appel_racine(&chars, i)?;
            out.push(JetonPose {
                position: i,
                jeton: Jeton::Racine(valeur),
            });
            i = apres;
            continue;
        }

        // Nombre décimal non signé
        if c.is_ascii_digit() || c == '.' {
            let (valeur, apres) = lire_nombre(&chars, i)?;
            out.push(JetonPose {
                position: i,
                jeton: Jeton::Nombre(valeur),
            });
            i = apres;
            continue;
        }

        // Caractère hors grammaire (espaces compris)
        return None;
    }

    Some(out)
}

/// Au moins un opérateur arithmétique ou un appel racine ?
/// (Une chaîne qui pave sans aucun des deux est une suite de nombres :
/// rien à évaluer.)
pub fn operateurs_presents(jetons: &[JetonPose]) -> bool {
    jetons
        .iter()
        .any(|j| matches!(j.jeton, Jeton::Operateur(_) | Jeton::Racine(_)))
}

fn est_caractere_mot(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lit un nombre à partir de `depart` (munch maximal).
/// Formes acceptées : `12`, `3.5`, `.25`. Un point non suivi d'un chiffre
/// n'appartient à aucun nombre ("1." ne donne que "1").
/// Retourne (valeur, index après le nombre), ou None si aucun nombre ici.
fn lire_nombre(chars: &[char], depart: usize) -> Option<(f64, usize)> {
    let mut i = depart;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }

    // partie décimale : '.' suivi d'au moins un chiffre
    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        i += 2;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i == depart {
        return None;
    }

    let texte: String = chars[depart..i].iter().collect();
    let valeur = texte.parse::<f64>().ok()?;
    Some((valeur, i))
}

/// Lit un appel `sqrt(<nombre>)` complet à partir de `depart`.
/// Retourne (argument, index après la parenthèse fermante), ou None si
/// l'appel est incomplet (préfixe tronqué, argument absent, `)` manquante).
fn lire_appel_racine(chars: &[char], depart: usize) -> Option<(f64, usize)> {
    const PREFIXE: [char; 5] = ['s', 'q', 'r', 't', '('];

    for (k, attendu) in PREFIXE.iter().enumerate() {
        if chars.get(depart + k) != Some(attendu) {
            return None;
        }
    }

    let (valeur, apres_nombre) = lire_nombre(chars, depart + PREFIXE.len())?;
    if chars.get(apres_nombre) != Some(&')') {
        return None;
    }

    Some((valeur, apres_nombre + 1))
}
