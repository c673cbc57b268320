use crate::core::surface::Surface;

pub fn render(out: &mut dyn Surface) {
    out.title("🔊 Soundbox - Real-Time Blockchain Transaction Notifications");
    out.image(
        "Assets/soundbox/Screenshot 2024-08-09 073134.png",
        Some("🎵 Waiting For Transaction"),
    );

    out.heading("🎶 What is Soundbox?");
    out.markdown(
        r#"**Soundbox** is an innovative feature of nextPay that delivers real-time audio notifications for every blockchain transaction.
Inspired by Paytm's instant payment confirmation system, Soundbox enhances your experience by providing immediate, audible feedback on your financial activities across multiple blockchains. 🌐"#,
    );

    out.heading("🎛️ Customizable Alerts");
    out.markdown(
        r#"With Soundbox, you have full control over which blockchains you monitor.
Customize your notification preferences to receive alerts only for the transactions that matter most to you. 🎯"#,
    );

    out.heading("🔥 Key Benefits");
    out.markdown(
        r#"- **Instant Feedback:** Receive immediate auditory confirmations for each transaction, boosting your confidence and control over your digital finances. 🛡️
- **Personalized Monitoring:** Select specific blockchains to monitor, ensuring that you stay updated on the most relevant transactions. 🕵️
- **Seamless Integration:** Soundbox is fully integrated into nextPay, providing a smooth and intuitive user experience for managing cross-chain transactions. 🚀"#,
    );

    out.image(
        "Assets/soundbox/Screenshot 2024-08-09 073810.png",
        Some("🎵 Trasaction Complete"),
    );
    out.heading("📈 Potential Use Cases");
    out.markdown(
        r#"**Soundbox** is ideal for various scenarios, including:

- **DeFi Traders:** Get instant audio confirmations for trades and swaps, enhancing decision-making and risk management. 💱
- **Cross-Chain Users:** Monitor Ethereum transfers across different blockchain networks, ensuring seamless financial management. 🔗
- **Passive Income Earners:** Stay informed about staking rewards, lending interest, and other DeFi activities with custom alerts. 💸"#,
    );

    out.heading("👨‍💻 For Developers: The Technical Breakdown");
    out.markdown(
        r#"Let's dive into the technical aspects of Soundbox and how it operates behind the scenes to provide real-time transaction notifications. This feature is built using React and TypeScript, leveraging hooks and state management for optimal performance.

**Core Components:**

- **React Hooks:** We utilize `useEffect` and `useState` hooks to manage the component's lifecycle and state. The `useEffect` hook sets up event listeners for blockchain transactions, while `useState` tracks the type of blockchain and the transaction data.
- **Blockchain Event Handling:** Each blockchain has a dedicated hook (e.g., `toTransferETH`, `toTransferBSC`) that establishes a connection to the corresponding smart contract. These hooks listen for `Transfer` events and update the state when a transaction is detected.
- **Speech Synthesis API:** For delivering audio notifications, we use the Web Speech API's `speechSynthesis` feature. When a transaction is detected, the `speak` function converts the event data into spoken words, ensuring the user receives immediate audio feedback.

**Sample Code Explanation:**

```typescript
const setupListener = async () => {
    const handleTransferEvent = (
        _from: string,
        _to: string,
        _amount: string,
        _name: string,
        _blockchain: string
    ) => {
        const message = `${_from} sent ${formatEther(_amount)} to ${_to} on ${_blockchain} blockchain with name ${_name}`;
        console.log('Event Data:', message);
        if (_to.toLowerCase() === accountName.toLowerCase()) {
            setEventData({
                from: _from,
                to: _to,
                amount: formatEther(_amount),
                name: _name,
                blockchain: _blockchain,
            });
        }
    };

    const setupEventListener = async (getContract: any) => {
        const TransferTokenContract = getContract();
        console.log('Contract:', TransferTokenContract);

        await TransferTokenContract.on('Transfer', handleTransferEvent);
        contractEventListeners.push(() =>
            TransferTokenContract.removeAllListeners('Transfer')
        );
    };

    if (type === 'ETH') {
        const { getContractETH } = toTransferETH();
        await setupEventListener(getContractETH);
    } else if (type === 'BSC') {
        const { getContractBSC } = toTransferBSC();
        await setupEventListener(getContractBSC);
    } //... (similar blocks for other blockchains)
};
```

**Explanation:**

- **Event Listener Setup:** This function listens for `Transfer` events on various blockchains. When a transaction is detected, the event data (sender, recipient, amount, blockchain, etc.) is captured and logged. If the transaction involves the current user's account, it updates the state with this data.
- **Dynamic Blockchain Selection:** Depending on the user's selected blockchain (`ETH`, `BSC`, `PLG`, etc.), the corresponding hook is used to get the contract instance and set up the event listener. This modular approach ensures that Soundbox can support multiple blockchains with minimal code duplication.
- **Real-Time Audio Feedback:** Once the event data is captured, the `speak` function uses the SpeechSynthesis API to provide real-time audio feedback, ensuring users are promptly notified of transactions.

**Why It Matters:**

- **Efficiency:** By using modular hooks and centralized event handling, the system remains efficient and scalable, capable of supporting a wide range of blockchains with minimal overhead.
- **Customization:** The use of hooks allows for easy customization and extension. Developers can add support for new blockchains by simply creating additional hooks and integrating them into the existing framework.
- **User Experience:** The seamless integration of real-time audio notifications ensures that users are always in the loop, enhancing the overall user experience and providing peace of mind in managing digital assets.

Soundbox is more than just a notification system—it's a robust, developer-friendly feature that adds tangible value to the nextPay platform. 🚀"#,
    );
}
