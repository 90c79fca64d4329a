
mod redeem;
