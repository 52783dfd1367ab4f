// src/noyau/paliers.rs
//
// Évaluation par paliers.
//
// Six passes, STRICTEMENT dans l'ordre ORDRE_PALIERS (exposant, racine,
// multiplication, division, addition, soustraction), quelle que soit la
// position des opérateurs dans le texte. Chaque palier :
//   1. parcourt la liste (rétrécissante) dans l'ordre des positions ;
//   2. exige arg1, et arg2 sauf pour la racine — opérande manquante ici
//      = échec de toute l'évaluation, aucun palier suivant ;
//   3. calcule en f64 (division par zéro => ±inf ou NaN, jamais une erreur) ;
//   4. greffe le résultat : arg2 du prédécesseur ENCORE EN LISTE, arg1 du
//      successeur ENCORE EN LISTE (voisinage dans la liste courante, pas
//      dans le texte ; les opérations du même palier pas encore retirées
//      comptent comme voisines) ;
//   5. retire ensuite toutes les opérations du palier.
//
// Après les six paliers la liste est vide ; le scalaire retourné est le
// dernier calcul effectué.

use super::operations::{OperationSimple, Operateur, ORDRE_PALIERS};

/// Consomme la liste d'opérations palier par palier.
/// None si une opération atteint son palier avec une opérande requise
/// toujours manquante.
pub fn executer_paliers(mut ops: Vec<OperationSimple>) -> Option<f64> {
    let mut resultat = 0.0;

    for palier in ORDRE_PALIERS {
        let mut i = 0;
        while i < ops.len() {
            if ops[i].operateur != palier {
                i += 1;
                continue;
            }

            let op = ops[i];
            let r = calculer(op)?;
            resultat = r;

            // Greffe aux voisins encore en liste. Une greffe posée ici est
            // visible par les opérations du même palier plus à droite.
            if i > 0 {
                ops[i - 1].arg2 = Some(r);
            }
            if i + 1 < ops.len() {
                ops[i + 1].arg1 = Some(r);
            }

            i += 1;
        }

        ops.retain(|op| op.operateur != palier);
    }

    Some(resultat)
}

/// Un calcul unitaire. None = opérande requise absente au moment du palier.
fn calculer(op: OperationSimple) -> Option<f64> {
    let a = op.arg1?;

    let r = match op.operateur {
        Operateur::Exposant => a.powf(op.arg2?),
        Operateur::Racine => a.sqrt(),
        Operateur::Multiplication => a * op.arg2?,
        Operateur::Division => a / op.arg2?,
        Operateur::Addition => a + op.arg2?,
        Operateur::Soustraction => a - op.arg2?,
    };

    Some(r)
}
