//! Owns every tournament and writes through to the injected store after each mutation.

use crate::logic::{self, ScoreChange};
use crate::models::{
    GameMatch, MatchId, Missing, Side, Standing, Tournament, TournamentConfig, TournamentError,
    TournamentId, TournamentSummary,
};
use crate::store::{StoreResult, TournamentStore};

/// The only place tournaments are created or scored.
#[derive(Debug)]
pub struct TournamentRepository<S> {
    store: S,
    tournaments: Vec<Tournament>,
}

impl<S: TournamentStore> TournamentRepository<S> {
    /// Load whatever the store already holds.
    pub fn open(store: S) -> StoreResult<Self> {
        let tournaments = store.load()?;
        log::info!("Loaded {} tournament(s)", tournaments.len());
        Ok(Self { store, tournaments })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get(&self, id: TournamentId) -> Result<&Tournament, TournamentError> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or(TournamentError::NotFound(Missing::Tournament(id)))
    }

    fn get_mut(&mut self, id: TournamentId) -> Result<&mut Tournament, TournamentError> {
        self.tournaments
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TournamentError::NotFound(Missing::Tournament(id)))
    }

    /// Summaries in creation order.
    pub fn summaries(&self) -> Vec<TournamentSummary> {
        self.tournaments.iter().map(Tournament::summary).collect()
    }

    pub fn create_tournament(
        &mut self,
        config: TournamentConfig,
    ) -> Result<&Tournament, TournamentError> {
        let tournament = logic::create_tournament(config)?;
        log::info!(
            "Created tournament {} ({:?}): {} players, {} court(s), {} rounds",
            tournament.id,
            tournament.name,
            tournament.players.len(),
            tournament.courts,
            tournament.rounds.len()
        );
        self.tournaments.push(tournament);
        self.persist();
        // Just pushed.
        Ok(&self.tournaments[self.tournaments.len() - 1])
    }

    pub fn update_score(
        &mut self,
        id: TournamentId,
        round_index: usize,
        match_id: MatchId,
        side: Side,
        change: ScoreChange,
    ) -> Result<GameMatch, TournamentError> {
        let updated = logic::update_score(self.get_mut(id)?, round_index, match_id, side, change)?;
        self.persist();
        Ok(updated)
    }

    pub fn record_result(
        &mut self,
        id: TournamentId,
        round_index: usize,
        match_id: MatchId,
        team_1: u32,
        team_2: u32,
    ) -> Result<GameMatch, TournamentError> {
        let tournament = self.get_mut(id)?;
        let updated = logic::record_result(tournament, round_index, match_id, team_1, team_2)?;
        self.persist();
        Ok(updated)
    }

    pub fn leaderboard(&self, id: TournamentId) -> Result<Vec<Standing>, TournamentError> {
        Ok(logic::compute_leaderboard(self.get(id)?))
    }

    /// Durability is best effort: a failed save is logged and the in-memory state stays.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.tournaments) {
            log::warn!("Failed to save tournaments: {}", e);
        }
    }
}
