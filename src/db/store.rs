// src/db/store.rs

use std::sync::Arc;

use tokio::sync::RwLock;

/// Coleção de registros em memória — o contrato genérico de acesso a dados
/// que os registros (`*_repo.rs`) compartilham.
///
/// Cada chamada adquire o lock uma única vez: a operação individual é
/// atômica, mas nada encadeia duas chamadas numa transação. Sequências
/// checa-depois-age entre chamadas distintas (ex: consulta de
/// disponibilidade seguida da gravação da reserva) continuam sem
/// serialização, como no fluxo original.
#[derive(Clone)]
pub struct Collection<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, row: T) -> T {
        let mut rows = self.rows.write().await;
        rows.push(row.clone());
        row
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn select(&self, filter: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| filter(row))
            .cloned()
            .collect()
    }

    pub async fn find_one(&self, filter: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().await.iter().find(|row| filter(row)).cloned()
    }

    pub async fn count(&self, filter: impl Fn(&T) -> bool) -> usize {
        self.rows.read().await.iter().filter(|row| filter(row)).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Aplica `mutate` a todos os registros aceitos por `filter`,
    /// devolvendo quantos foram alterados.
    pub async fn update(
        &self,
        filter: impl Fn(&T) -> bool,
        mut mutate: impl FnMut(&mut T),
    ) -> usize {
        let mut rows = self.rows.write().await;
        let mut touched = 0;
        for row in rows.iter_mut() {
            if filter(row) {
                mutate(row);
                touched += 1;
            }
        }
        touched
    }

    /// Variante de registro único: filtro e mutação sob o mesmo lock, o que
    /// torna atômicas as escritas guardadas por pré-condição (ex: débito de
    /// pontos só quando o saldo alcança).
    pub async fn update_one(
        &self,
        filter: impl Fn(&T) -> bool,
        mutate: impl FnOnce(&mut T),
    ) -> Option<T> {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|row| filter(row))?;
        mutate(row);
        Some(row.clone())
    }

    /// Substituição integral do primeiro registro aceito pelo filtro.
    pub async fn replace_one(&self, filter: impl Fn(&T) -> bool, new_row: T) -> Option<T> {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|row| filter(row))?;
        *row = new_row;
        Some(row.clone())
    }

    pub async fn delete(&self, filter: impl Fn(&T) -> bool) -> usize {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| !filter(row));
        before - rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_one_is_guarded_by_its_filter() {
        let col: Collection<i32> = Collection::new();
        col.insert(10).await;

        // filtro falso: nada muda
        assert!(col.update_one(|v| *v > 50, |v| *v -= 100).await.is_none());
        assert_eq!(col.find_one(|_| true).await, Some(10));

        // filtro verdadeiro: muta e devolve o novo valor
        assert_eq!(col.update_one(|v| *v == 10, |v| *v += 5).await, Some(15));
    }

    #[tokio::test]
    async fn delete_reports_removed_count() {
        let col: Collection<i32> = Collection::new();
        for v in [1, 2, 3, 4] {
            col.insert(v).await;
        }
        assert_eq!(col.delete(|v| v % 2 == 0).await, 2);
        assert_eq!(col.all().await, vec![1, 3]);
    }
}
