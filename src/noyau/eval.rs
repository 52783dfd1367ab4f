//! Noyau — évaluation (pipeline complet)
//!
//! découpage (pavage) -> présence d'opérateurs -> regroupement par sorte
//!        -> cohérence exposant -> paliers -> chaîne résultat
//!
//! Toutes les issues sont des chaînes, côté utilisateur :
//! le résultat formaté, ou l'un des messages fixes du tableau ci-dessous.
//! Aucun panic ne traverse ce point d'entrée, quelle que soit l'entrée.

use super::analyse::{grouper_operations, operations_coherentes};
use super::jetons::{decouper, operateurs_presents};
use super::paliers::executer_paliers;

/// Échec de syntaxe : la chaîne ne pave pas avec la grammaire.
const MSG_SYNTAXE: &str = "Invalid syntax";

/// Aucun opérateur ni appel racine dans la chaîne.
const MSG_SANS_OPERATEUR: &str = "No operators present";

/// Échec à l'analyse : un exposant sans opérande (pluriel, volontaire).
const MSG_INCOHERENCE_ANALYSE: &str = "Inconsistent operations";

/// Échec à l'évaluation : opérande toujours manquante à son palier
/// (singulier, volontaire — à ne JAMAIS fusionner avec le précédent,
/// les deux messages sont un comportement observable distinct).
const MSG_INCOHERENCE_PALIER: &str = "Inconsistent operation";

/// API publique : évalue une expression plate et retourne soit le résultat
/// numérique formaté, soit un message d'erreur fixe.
///
/// - Entrée vide => chaîne vide, immédiatement.
/// - Division par zéro et consorts : valeurs spéciales f64 ("inf", "NaN")
///   incluses dans le résultat, pas des erreurs.
pub fn evaluer_expression(expression: &str) -> String {
    if expression.is_empty() {
        return String::new();
    }

    // 1) Pavage strict (test de syntaxe)
    let jetons = match decouper(expression) {
        Some(jetons) => jetons,
        None => return MSG_SYNTAXE.to_string(),
    };

    // 2) Présence d'au moins un opérateur
    if !operateurs_presents(&jetons) {
        return MSG_SANS_OPERATEUR.to_string();
    }

    // 3) Regroupement par sorte + cohérence exposant
    let ops = grouper_operations(&jetons);
    if !operations_coherentes(&ops) {
        return MSG_INCOHERENCE_ANALYSE.to_string();
    }

    // 4) Paliers
    match executer_paliers(ops) {
        Some(valeur) => format!("{valeur}"),
        None => MSG_INCOHERENCE_PALIER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::evaluer_expression;

    fn evalue(s: &str) -> String {
        evaluer_expression(s)
    }

    fn assert_resultat(expr: &str, attendu: &str) {
        let sortie = evalue(expr);
        assert_eq!(sortie, attendu, "expr={expr:?}");
    }

    // --- Issues de base ---

    #[test]
    fn entree_vide() {
        assert_resultat("", "");
    }

    #[test]
    fn addition_simple() {
        assert_resultat("2+2", "4");
    }

    #[test]
    fn exposant_simple() {
        assert_resultat("2^3", "8");
    }

    #[test]
    fn racine_simple() {
        assert_resultat("sqrt(16)", "4");
    }

    // --- Erreurs fixes ---

    #[test]
    fn syntaxe_invalide() {
        assert_resultat("abc", "Invalid syntax");
    }

    #[test]
    fn aucun_operateur() {
        assert_resultat("5", "No operators present");
    }

    #[test]
    fn exposant_sans_operande_gauche() {
        // détecté à l'analyse : pluriel
        assert_resultat("^5", "Inconsistent operations");
    }

    #[test]
    fn exposant_sans_operande_droite() {
        assert_resultat("5^", "Inconsistent operations");
    }

    #[test]
    fn operande_manquante_au_palier() {
        // détecté au palier : singulier
        assert_resultat("2*", "Inconsistent operation");
    }

    // --- Greffes entre paliers ---

    #[test]
    fn multiplication_avant_addition() {
        // 3*4 est résolu au palier multiplication puis greffé : 2+12
        assert_resultat("2+3*4", "14");
    }

    #[test]
    fn additions_partagent_operande_via_greffe() {
        // deux additions indépendantes ; le 3 du milieu circule par greffe
        assert_resultat("2+3+4", "9");
    }

    #[test]
    fn racine_greffee_dans_addition() {
        assert_resultat("2+sqrt(4)", "4");
        assert_resultat("sqrt(4)+2", "4");
    }

    // --- f64 : valeurs spéciales, pas des erreurs ---

    #[test]
    fn division_par_zero_donne_infini() {
        let sortie = evalue("4/0");
        let valeur: f64 = sortie.parse().unwrap_or_else(|_| {
            panic!("sortie non numérique pour 4/0 : {sortie:?}");
        });
        assert!(valeur.is_infinite() && valeur > 0.0, "sortie={sortie:?}");
    }

    #[test]
    fn zero_sur_zero_donne_nan() {
        let sortie = evalue("0/0");
        let valeur: f64 = sortie.parse().unwrap_or_else(|_| {
            panic!("sortie non numérique pour 0/0 : {sortie:?}");
        });
        assert!(valeur.is_nan(), "sortie={sortie:?}");
    }
}
