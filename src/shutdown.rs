//! 종료 시그널 대기
//!
//! SIGINT(Ctrl+C) 또는 SIGTERM을 받을 때까지 대기합니다. 반환되면 서버는
//! 신규 연결 수락을 멈추고 진행 중인 요청을 마저 처리한 뒤 종료합니다.

use tokio::signal;

pub async fn shutdown_signal() {
    #[cfg(unix)]
    let sigterm = async {
        let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler");
        stream.recv().await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Ctrl+C 핸들러 등록 실패");
            }
            tracing::info!("SIGINT 수신, 종료를 시작합니다");
        }
        _ = sigterm => {
            tracing::info!("SIGTERM 수신, 종료를 시작합니다");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn shutdown_signal_should_wait_for_a_signal() {
        let result = timeout(Duration::from_millis(10), shutdown_signal()).await;

        // 타임아웃 발생 = 시그널 대기 중
        assert!(result.is_err());
    }
}
