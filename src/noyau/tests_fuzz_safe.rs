//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées + budget temps global
//! - invariant clé : AUCUNE entrée ne fait paniquer le moteur ; la sortie
//!   est soit un nombre f64 (inf/NaN compris), soit l'un des quatre
//!   messages fixes, soit la chaîne vide (entrée vide seulement)

use std::time::{Duration, Instant};

use super::evaluer_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const MESSAGES_FIXES: [&str; 4] = [
    "Invalid syntax",
    "No operators present",
    "Inconsistent operations",
    "Inconsistent operation",
];

fn est_message_fixe(sortie: &str) -> bool {
    MESSAGES_FIXES.contains(&sortie)
}

fn est_nombre(sortie: &str) -> bool {
    sortie.parse::<f64>().is_ok()
}

/// Invariant de sortie, pour N'IMPORTE QUELLE entrée.
fn check_sortie(entree: &str, sortie: &str) {
    if entree.is_empty() {
        assert!(sortie.is_empty(), "entrée vide => sortie vide, eu {sortie:?}");
        return;
    }
    assert!(
        est_nombre(sortie) || est_message_fixe(sortie),
        "sortie hors contrat: entrée={entree:?} sortie={sortie:?}"
    );
}

/* ------------------------ Génération d'entrées (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(100);
    match rng.pick(3) {
        0 => format!("{a}"),
        1 => format!("{a}.{}", rng.pick(100)),
        _ => format!(".{}", 1 + rng.pick(99)),
    }
}

fn gen_segment(rng: &mut Rng) -> String {
    if rng.coin() {
        gen_nombre(rng)
    } else {
        format!("sqrt({})", gen_nombre(rng))
    }
}

fn gen_operateur(rng: &mut Rng) -> char {
    match rng.pick(5) {
        0 => '^',
        1 => '*',
        2 => '/',
        3 => '+',
        _ => '-',
    }
}

/// Expression qui pave toujours : segments (nombre ou sqrt) alternés avec
/// des opérateurs, au moins un opérateur.
fn gen_expr_valide(rng: &mut Rng) -> String {
    let segments = 2 + rng.pick(4);
    let mut out = gen_segment(rng);
    for _ in 1..segments {
        out.push(gen_operateur(rng));
        out.push_str(&gen_segment(rng));
    }
    out
}

/// Soupe de caractères arbitraires (dont espaces et lettres) : la plupart
/// ne pavent pas, certaines pavent par accident. Les deux doivent sortir
/// proprement.
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: [char; 16] = [
        '0', '1', '9', '.', '^', '*', '/', '+', '-', 's', 'q', 'r', 't', '(', ')', ' ',
    ];
    let longueur = rng.pick(14) as usize;
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_soupe_jamais_hors_contrat() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let entree = gen_soupe(&mut rng);
        let sortie = evaluer_expression(&entree);
        check_sortie(&entree, &sortie);
    }
}

#[test]
fn fuzz_safe_expressions_valides() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_nombre = 0usize;
    let mut seen_incoherence = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let entree = gen_expr_valide(&mut rng);
        let sortie = evaluer_expression(&entree);

        // Une expression qui pave, avec opérateurs, ne peut sortir que par
        // un nombre ou par une incohérence d'opérandes (exposant collé à
        // une racine, chaîne d'exposants...). Jamais par la syntaxe ni par
        // l'absence d'opérateurs.
        if est_nombre(&sortie) {
            seen_nombre += 1;
        } else {
            assert!(
                sortie == "Inconsistent operations" || sortie == "Inconsistent operation",
                "sortie inattendue: entrée={entree:?} sortie={sortie:?}"
            );
            seen_incoherence += 1;
        }
    }

    // On veut voir les deux familles, sinon le fuzz ne balaye rien.
    assert!(seen_nombre > 50, "trop peu de nombres: {seen_nombre}");
    assert!(seen_incoherence > 0, "aucune incohérence vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_suites_de_nombres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..100 {
        budget(t0, max);

        // concaténation de nombres, sans aucun opérateur : quelle que soit
        // la façon dont le pavage recoupe les chiffres, l'issue est fixe
        let n = 1 + rng.pick(3);
        let entree: String = (0..n).map(|_| gen_nombre(&mut rng)).collect();
        assert_eq!(
            evaluer_expression(&entree),
            "No operators present",
            "entrée={entree:?}"
        );
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let passe = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..60)
            .map(|_| {
                let entree = if rng.coin() {
                    gen_expr_valide(&mut rng)
                } else {
                    gen_soupe(&mut rng)
                };
                evaluer_expression(&entree)
            })
            .collect()
    };

    // Même seed => mêmes entrées => mêmes sorties.
    assert_eq!(passe(0xD0_u64), passe(0xD0_u64));
}

#[test]
fn fuzz_safe_chaine_longue_anti_gel() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 200 additions en chaîne : les greffes traversent la liste sans
    // récursion, le temps reste linéaire.
    let mut entree = String::from("1");
    for _ in 0..200 {
        entree.push_str("+1");
    }

    let sortie = evaluer_expression(&entree);
    budget(t0, max);

    assert_eq!(sortie, "201");
}
