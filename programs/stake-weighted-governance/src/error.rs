use anchor_lang::prelude::*;

#[error_code]
pub enum GovernanceError {
    #[msg("Stake is below the minimum required for this action")]
    InsufficientStake,
    #[msg("Caller is not the owner of this account")]
    Unauthorized,
    #[msg("Unstake cooldown period has not passed")]
    CooldownNotPassed,
    #[msg("No unstake request is pending")]
    NoUnstakeRequested,
    #[msg("An unstake request is already pending")]
    UnstakeAlreadyRequested,
    #[msg("Proposal is not accepting votes")]
    VotingClosed,
    #[msg("Voter has already voted on this proposal")]
    AlreadyVoted,
    #[msg("Vote carries no stake weight")]
    ZeroWeightVote,
    #[msg("Voting period has not ended yet")]
    ProposalNotEnded,
    #[msg("Proposal is already finalized")]
    AlreadyFinalized,
    #[msg("Metadata URI is empty or exceeds the maximum length")]
    InvalidMetadataUri,
    #[msg("Account holds an out-of-range enum value")]
    InvalidAccountData,
    #[msg("Math overflow occurred")]
    MathOverflow,
}
